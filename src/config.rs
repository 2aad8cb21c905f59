// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use log::LevelFilter;
use mx_numplan_domain::PatternSyntax;
use mx_numplan_ports::sink::ProvisionTarget;
use mx_numplan_shared_kernel::{Category, DigitLength, NumplanError, PresentationError};

use crate::cli::Args;

/// Prefix used for call manager patterns when none is given.
pub const DEFAULT_UCM_PREFIX: &str = "\\+52";

/// Input path meaning "newest dated export in the data directory".
pub const LATEST_DATASET: &str = ".";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Summarize one dataset and print the patterns of one category.
    Summarize,
    /// Compare every dataset in the data directory.
    Analyze,
    /// Summarize, then align the sink file with the result.
    Sync {
        sink: PathBuf,
        partition: String,
        target: ProvisionTarget,
        read_only: bool,
    },
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(LATEST_DATASET)")]
    pub from_file: PathBuf,
    #[builder(default = "PathBuf::from(\".\")")]
    pub data_dir: PathBuf,
    #[builder(default)]
    pub digits: DigitLength,
    #[builder(default = "Category::Mobile")]
    pub category: Category,
    #[builder(default)]
    pub show_patterns: bool,
    #[builder(default)]
    pub syntax: PatternSyntax,
    #[builder(default = "DEFAULT_UCM_PREFIX.to_string()")]
    pub prefix: String,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "Mode::Summarize")]
    pub mode: Mode,
    #[builder(default = "LevelFilter::Info")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Whether the dataset should be looked up in the data directory.
    pub fn wants_latest(&self) -> bool {
        self.from_file.as_os_str() == LATEST_DATASET
    }
}

impl TryFrom<Args> for Config {
    type Error = NumplanError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let digits = DigitLength::new(args.digits).map_err(|err| PresentationError::InvalidValue {
            flag: "--digits".to_string(),
            value: args.digits.to_string(),
            reason: err.to_string(),
        })?;

        let syntax = PatternSyntax::from(args.syntax);
        let prefix = args.prefix.unwrap_or_else(|| match syntax {
            PatternSyntax::Ucm => DEFAULT_UCM_PREFIX.to_string(),
            PatternSyntax::Generic => String::new(),
        });

        if args.partition.trim().is_empty() {
            return Err(PresentationError::InvalidValue {
                flag: "--partition".to_string(),
                value: args.partition,
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let target = match args.route_list {
            Some(name) if name.trim().is_empty() => {
                return Err(PresentationError::InvalidValue {
                    flag: "--route-list".to_string(),
                    value: name,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
            Some(name) => ProvisionTarget::RouteList(name),
            None => ProvisionTarget::Blocking,
        };

        let mode = match (args.analysis, args.sink) {
            (true, _) => Mode::Analyze,
            (false, Some(sink)) => Mode::Sync {
                sink,
                partition: args.partition,
                target,
                read_only: args.read_only,
            },
            (false, None) => Mode::Summarize,
        };

        let log_level = if args.debug {
            LevelFilter::Debug
        } else if args.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        };

        ConfigBuilder::default()
            .from_file(args.from_file)
            .data_dir(args.data_dir)
            .digits(digits)
            .category(Category::from(args.category))
            .show_patterns(args.patterns)
            .syntax(syntax)
            .prefix(prefix)
            .format(OutputFormat::from(args.format))
            .mode(mode)
            .log_level(log_level)
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()).into())
    }
}
