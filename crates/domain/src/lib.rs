//! # Domain
//!
//! The range summarization engine.
//!
//! - [`model`]: number ranges, merged intervals, dial patterns and change records
//! - [`summarize`]: range merging and dial pattern generation
//! - [`analytics`]: snapshot diffing and pattern list comparison
//! - [`render`]: dial plan dialects for emitting patterns
//!
//! Every operation here is a pure function over immutable values.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod render;
pub mod summarize;

pub use analytics::{PatternListDiff, compare_pattern_lists, diff_snapshots};
pub use model::{ChangeKind, ChangeRecord, DigitSet, MergedInterval, NumberRange, Pattern};
pub use render::PatternSyntax;
pub use summarize::{generate_patterns, merge_ranges};
