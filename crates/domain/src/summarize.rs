mod generator;
mod merge;

pub use generator::generate_patterns;
pub use merge::{merge_ranges, partition_by_category};
