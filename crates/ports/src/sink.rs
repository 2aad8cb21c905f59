// crates/ports/src/sink.rs
use std::fmt;

use mx_numplan_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// What a provisioned pattern does once it is in the sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionTarget {
    /// Blocking translation pattern.
    #[default]
    Blocking,
    /// Route pattern pointing at the named route list.
    RouteList(String),
}

impl ProvisionTarget {
    pub fn route_list(&self) -> Option<&str> {
        match self {
            Self::Blocking => None,
            Self::RouteList(name) => Some(name),
        }
    }
}

impl fmt::Display for ProvisionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocking => f.write_str("blocking translation patterns"),
            Self::RouteList(name) => write!(f, "route patterns to route list '{name}'"),
        }
    }
}

/// Port for the provisioning target holding rendered patterns in named partitions.
pub trait PatternSink: Send + Sync {
    /// Make sure `partition` exists. With `read_only` nothing is created.
    /// Returns whether the partition exists after the call.
    fn ensure_partition(&self, partition: &str, read_only: bool) -> Result<bool>;
    fn route_list_exists(&self, name: &str) -> Result<bool>;
    /// Patterns in `partition` provisioned for `target`.
    fn existing(&self, partition: &str, target: &ProvisionTarget) -> Result<Vec<String>>;
    fn add(&self, partition: &str, pattern: &str, target: &ProvisionTarget) -> Result<()>;
    fn remove(&self, partition: &str, pattern: &str) -> Result<()>;
}
