use std::fmt;

use serde::Serialize;

use super::interval::MergedInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Added => "added",
            Self::Removed => "removed",
        })
    }
}

/// A sub-range present on only one side of a snapshot comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub range: MergedInterval,
}

impl ChangeRecord {
    pub const fn added(range: MergedInterval) -> Self {
        Self { kind: ChangeKind::Added, range }
    }

    pub const fn removed(range: MergedInterval) -> Self {
        Self { kind: ChangeKind::Removed, range }
    }
}
