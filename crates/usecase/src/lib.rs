//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the summarization engine and the ports:
//!
//! - [`summarize`]: dataset → merged intervals → dial patterns, per category
//! - [`analyze`]: compare consecutive numbering plan snapshots
//! - [`provision`]: bring a pattern sink partition in line with generated patterns
//! - [`dto`]: reports crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod analyze;
pub mod dto;
pub mod provision;
pub mod summarize;

pub use analyze::AnalyzeSnapshots;
pub use dto::{AnalysisReport, CategorySummary, PlanSummary, SnapshotComparison, SyncReport};
pub use provision::SyncPatterns;
pub use summarize::{SummarizePlan, summarize_records};
