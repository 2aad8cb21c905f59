use mx_numplan_domain::{compare_pattern_lists, diff_snapshots};
use mx_numplan_ports::snapshots::{SnapshotId, SnapshotStore};
use mx_numplan_shared_kernel::{ApplicationError, Category, DigitLength, ErrorContext, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    dto::{AnalysisReport, CategorySummary, SnapshotComparison},
    summarize::summarize_records,
};

/// Walk every stored snapshot and report what changed between consecutive versions.
pub struct AnalyzeSnapshots<'a> {
    store: &'a dyn SnapshotStore,
    digits: DigitLength,
    category: Category,
}

impl<'a> AnalyzeSnapshots<'a> {
    pub fn new(store: &'a dyn SnapshotStore, digits: DigitLength, category: Category) -> Self {
        Self { store, digits, category }
    }

    pub fn run(&self) -> Result<AnalysisReport> {
        let mut snapshots = self.store.versions()?;
        if snapshots.is_empty() {
            return Err(
                ApplicationError::NoSnapshots { location: "snapshot store".to_string() }.into()
            );
        }
        snapshots.sort();
        log::info!("analyzing {} snapshots for {} numbers", snapshots.len(), self.category);

        #[cfg(feature = "parallel")]
        let summaries =
            snapshots.par_iter().map(|id| self.summarize(id)).collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let summaries = snapshots.iter().map(|id| self.summarize(id)).collect::<Result<Vec<_>>>()?;

        let mut comparisons = Vec::with_capacity(snapshots.len().saturating_sub(1));
        for (ids, pair) in snapshots.windows(2).zip(summaries.windows(2)) {
            let (old, new) = (&pair[0], &pair[1]);
            let changes = diff_snapshots(&old.intervals, &new.intervals)
                .with_context(|| format!("diffing {} against {}", ids[0], ids[1]))?;
            let comparison = SnapshotComparison {
                old: ids[0].clone(),
                new: ids[1].clone(),
                old_patterns: old.patterns.len(),
                new_patterns: new.patterns.len(),
                old_covered: old.covered_numbers,
                new_covered: new.covered_numbers,
                changes,
                patterns: compare_pattern_lists(&old.patterns, &new.patterns),
            };
            log::info!(
                "{} -> {}: {} changed sub-ranges, +{} -{} patterns",
                comparison.old,
                comparison.new,
                comparison.changes.len(),
                comparison.patterns.added.len(),
                comparison.patterns.removed.len()
            );
            comparisons.push(comparison);
        }

        Ok(AnalysisReport { category: self.category, snapshots, comparisons })
    }

    fn summarize(&self, id: &SnapshotId) -> Result<CategorySummary> {
        let records = self.store.load(id).with_context(|| format!("loading snapshot {id}"))?;
        let summary = summarize_records(&id.name, &records, self.digits)?;
        Ok(summary
            .categories
            .into_iter()
            .find(|c| c.category == self.category)
            .unwrap_or_else(|| CategorySummary::empty(self.category)))
    }
}
