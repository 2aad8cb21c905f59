// crates/infra/src/snapshot_dir.rs
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use chrono::NaiveDate;
use mx_numplan_ports::{
    dataset::{PlanRecord, PlanSource},
    snapshots::{SnapshotId, SnapshotStore},
};
use mx_numplan_shared_kernel::{InfrastructureError, Result};
use regex::Regex;

use crate::csv_source::CsvPlanSource;

static SNAPSHOT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^pnn_Publico_(\d{2})_(\d{2})_(\d{4})\.csv$").expect("snapshot name regex is valid")
});

/// Parse a `pnn_Publico_DD_MM_YYYY.csv` file name into a snapshot id.
pub fn snapshot_id(file_name: &str) -> Option<SnapshotId> {
    let caps = SNAPSHOT_NAME.captures(file_name)?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(SnapshotId { date, name: file_name.to_string() })
}

/// [`SnapshotStore`] over a directory of dated dataset exports.
#[derive(Debug, Clone)]
pub struct DirectorySnapshotStore {
    dir: PathBuf,
}

impl DirectorySnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, id: &SnapshotId) -> PathBuf {
        self.dir.join(&id.name)
    }

    /// Newest snapshot by embedded date.
    pub fn latest(&self) -> Result<Option<SnapshotId>> {
        Ok(self.versions()?.pop())
    }
}

impl SnapshotStore for DirectorySnapshotStore {
    fn versions(&self) -> Result<Vec<SnapshotId>> {
        let entries =
            std::fs::read_dir(&self.dir).map_err(|source| InfrastructureError::FileSystemOperation {
                operation: "read_dir".to_string(),
                path: self.dir.clone(),
                source,
            })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            match snapshot_id(name) {
                Some(id) => ids.push(id),
                None if name.starts_with("pnn_Publico_") => {
                    log::warn!("ignoring {name}: not a valid dated snapshot name");
                }
                None => {}
            }
        }
        ids.sort();
        log::debug!("{} snapshots in {}", ids.len(), self.dir.display());
        Ok(ids)
    }

    fn load(&self, id: &SnapshotId) -> Result<Vec<PlanRecord>> {
        CsvPlanSource::new(self.path_of(id)).records()
    }
}
