mod compare;
mod diff;

pub use compare::{PatternListDiff, compare_pattern_lists};
pub use diff::diff_snapshots;
