// crates/infra/src/pattern_file.rs
use std::{
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use mx_numplan_ports::sink::{PatternSink, ProvisionTarget};
use mx_numplan_shared_kernel::{ApplicationError, InfraResult, InfrastructureError, Result};
use serde::{Deserialize, Serialize};

use crate::persistence::{FileReader, FileWriter};

/// On-disk layout of the sink file.
///
/// ```json
/// {
///   "route_lists": ["MX-Mobile"],
///   "partitions": { "mobile": { "\\+52551XXXXXXX": { "route_list": "MX-Mobile" } } }
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
struct SinkState {
    #[serde(default)]
    route_lists: BTreeSet<String>,
    #[serde(default)]
    partitions: BTreeMap<String, BTreeMap<String, ProvisionTarget>>,
}

/// [`PatternSink`] persisted as a JSON file of partitions, each mapping a pattern
/// to the target it was provisioned as.
///
/// Route lists are never created here; they are listed by hand under
/// `route_lists`. Every mutation rewrites the file atomically, so an interrupted
/// sync leaves a consistent file behind.
#[derive(Debug)]
pub struct FilePatternSink {
    path: PathBuf,
    state: Mutex<SinkState>,
}

impl FilePatternSink {
    /// Load the sink file, starting empty when it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match FileReader::read_optional(&path)? {
            Some(text) if !text.trim().is_empty() => {
                serde_json::from_str(&text).map_err(|err| InfrastructureError::SerializationError {
                    format: "JSON".to_string(),
                    details: format!("{}: {err}", path.display()),
                })?
            }
            _ => SinkState::default(),
        };
        Ok(Self { path, state: Mutex::new(state) })
    }

    fn lock(&self) -> Result<MutexGuard<'_, SinkState>> {
        self.state.lock().map_err(|_| {
            InfrastructureError::OutputError {
                message: "pattern sink state is poisoned".to_string(),
                source: None,
            }
            .into()
        })
    }

    fn persist(&self, state: &SinkState) -> InfraResult<()> {
        FileWriter::write_json(&self.path, state)
    }
}

fn rejected(partition: &str, pattern: &str, reason: &str) -> ApplicationError {
    ApplicationError::SinkRejected {
        partition: partition.to_string(),
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

impl PatternSink for FilePatternSink {
    fn ensure_partition(&self, partition: &str, read_only: bool) -> Result<bool> {
        let mut state = self.lock()?;
        if state.partitions.contains_key(partition) {
            return Ok(true);
        }
        if read_only {
            return Ok(false);
        }
        log::info!("creating partition '{partition}' in {}", self.path.display());
        state.partitions.insert(partition.to_string(), BTreeMap::new());
        self.persist(&state)?;
        Ok(true)
    }

    fn route_list_exists(&self, name: &str) -> Result<bool> {
        Ok(self.lock()?.route_lists.contains(name))
    }

    fn existing(&self, partition: &str, target: &ProvisionTarget) -> Result<Vec<String>> {
        let state = self.lock()?;
        let Some(entries) = state.partitions.get(partition) else {
            return Ok(Vec::new());
        };
        Ok(entries.iter().filter(|(_, t)| *t == target).map(|(p, _)| p.clone()).collect())
    }

    fn add(&self, partition: &str, pattern: &str, target: &ProvisionTarget) -> Result<()> {
        let mut state = self.lock()?;
        let Some(entries) = state.partitions.get_mut(partition) else {
            return Err(ApplicationError::PartitionUnavailable {
                partition: partition.to_string(),
                reason: "partition does not exist".to_string(),
            }
            .into());
        };
        if let Some(current) = entries.get(pattern) {
            let reason = format!("pattern already present as {current}");
            return Err(rejected(partition, pattern, &reason).into());
        }
        entries.insert(pattern.to_string(), target.clone());
        self.persist(&state)?;
        Ok(())
    }

    fn remove(&self, partition: &str, pattern: &str) -> Result<()> {
        let mut state = self.lock()?;
        let removed = state
            .partitions
            .get_mut(partition)
            .is_some_and(|entries| entries.remove(pattern).is_some());
        if !removed {
            return Err(rejected(partition, pattern, "pattern not present").into());
        }
        self.persist(&state)?;
        Ok(())
    }
}
