// crates/ports/src/dataset.rs
use mx_numplan_shared_kernel::{Category, Result};
use serde::{Deserialize, Serialize};

/// One carrier block as delivered by a dataset loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub start: String,
    pub end: String,
    pub category: Category,
    pub digits: u8,
}

/// Port yielding the rows of one fully parsed numbering plan dataset.
pub trait PlanSource: Send + Sync {
    /// Human readable name of the dataset (file name, URL, ...).
    fn describe(&self) -> String;
    fn records(&self) -> Result<Vec<PlanRecord>>;
}
