// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::{CliCategory, CliOutputFormat, CliSyntax};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "mx_numplan",
    version = crate::VERSION,
    about = "Summarize Mexican numbering plan ranges into minimal dial patterns",
    long_about = "Reads the regulator's public numbering plan export, merges the number blocks \
                  of one network type and expresses them as the smallest set of dial patterns. \
                  Optionally compares historical exports or aligns a pattern sink with the result."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Dataset CSV to read. `.` picks the newest pnn_Publico_DD_MM_YYYY.csv in --data-dir
    #[arg(
        long = "from-file",
        default_value = ".",
        value_hint = ValueHint::FilePath,
        help_heading = "Input"
    )]
    pub from_file: PathBuf,

    /// Directory holding dated dataset exports
    #[arg(
        long = "data-dir",
        default_value = ".",
        value_hint = ValueHint::DirPath,
        help_heading = "Input"
    )]
    pub data_dir: PathBuf,

    /// Number of digits in a national number
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u8).range(1..=18),
        help_heading = "Input"
    )]
    pub digits: u8,

    /// Network type to summarize
    #[arg(long, value_enum, default_value = "mobile", help_heading = "Input")]
    pub category: CliCategory,

    /// Dump the rendered patterns
    #[arg(long, help_heading = "Output")]
    pub patterns: bool,

    /// Dial plan dialect for rendered patterns
    #[arg(long, value_enum, default_value = "ucm", help_heading = "Output")]
    pub syntax: CliSyntax,

    /// Prefix put in front of every rendered pattern [default: `\+52` for ucm, none for generic]
    #[arg(long, help_heading = "Output")]
    pub prefix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Compare the patterns of all datasets found in --data-dir
    #[arg(long, conflicts_with = "sink", help_heading = "Analysis")]
    pub analysis: bool,

    /// JSON file acting as the provisioning target for generated patterns
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Provisioning")]
    pub sink: Option<PathBuf>,

    /// Partition in the sink that receives the patterns
    #[arg(long, default_value = "mobile", requires = "sink", help_heading = "Provisioning")]
    pub partition: String,

    /// Provision route patterns to this route list instead of blocking translation patterns.
    /// The route list must already exist in the sink
    #[arg(
        long = "route-list",
        value_name = "NAME",
        requires = "sink",
        help_heading = "Provisioning"
    )]
    pub route_list: Option<String>,

    /// Only report what would change in the sink
    #[arg(long = "read-only", requires = "sink", help_heading = "Provisioning")]
    pub read_only: bool,

    /// Enable debug logging
    #[arg(long, conflicts_with = "quiet", help_heading = "Behavior")]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(long, help_heading = "Behavior")]
    pub quiet: bool,
}
