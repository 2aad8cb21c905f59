use mx_numplan_domain::{ChangeKind, ChangeRecord, MergedInterval, Pattern, PatternListDiff};
use mx_numplan_ports::{sink::ProvisionTarget, snapshots::SnapshotId};
use mx_numplan_shared_kernel::{Category, DigitLength};
use serde::Serialize;

/// Summarization result for one category of a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub raw_ranges: usize,
    pub intervals: Vec<MergedInterval>,
    pub patterns: Vec<Pattern>,
    pub covered_numbers: u64,
}

impl CategorySummary {
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            raw_ranges: 0,
            intervals: Vec::new(),
            patterns: Vec::new(),
            covered_numbers: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub dataset: String,
    pub digits: DigitLength,
    pub categories: Vec<CategorySummary>,
}

impl PlanSummary {
    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Changes between two consecutive snapshots for one category.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotComparison {
    pub old: SnapshotId,
    pub new: SnapshotId,
    pub old_patterns: usize,
    pub new_patterns: usize,
    pub old_covered: u64,
    pub new_covered: u64,
    pub changes: Vec<ChangeRecord>,
    pub patterns: PatternListDiff,
}

impl SnapshotComparison {
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub category: Category,
    pub snapshots: Vec<SnapshotId>,
    pub comparisons: Vec<SnapshotComparison>,
}

/// Outcome of aligning a sink partition with the generated patterns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub partition: String,
    pub target: ProvisionTarget,
    pub partition_ready: bool,
    pub existing: usize,
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
    pub applied: bool,
}
