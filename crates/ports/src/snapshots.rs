// crates/ports/src/snapshots.rs
use std::fmt;

use chrono::NaiveDate;
use mx_numplan_shared_kernel::Result;
use serde::{Deserialize, Serialize};

use crate::dataset::PlanRecord;

/// Identifies one published version of the numbering plan.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotId {
    pub date: NaiveDate,
    pub name: String,
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Port over historical datasets.
pub trait SnapshotStore: Send + Sync {
    /// Known versions, oldest first.
    fn versions(&self) -> Result<Vec<SnapshotId>>;
    fn load(&self, id: &SnapshotId) -> Result<Vec<PlanRecord>>;
}
