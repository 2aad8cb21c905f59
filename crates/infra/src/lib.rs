// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod csv_source;
pub mod pattern_file;
pub mod persistence;
pub mod snapshot_dir;

pub use csv_source::CsvPlanSource;
pub use pattern_file::FilePatternSink;
pub use snapshot_dir::DirectorySnapshotStore;
