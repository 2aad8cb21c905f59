use clap::ValueEnum;
use mx_numplan_domain::PatternSyntax;
use mx_numplan_shared_kernel::Category;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
    Yaml,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCategory {
    Mobile,
    Other,
}

impl From<CliCategory> for Category {
    fn from(value: CliCategory) -> Self {
        match value {
            CliCategory::Mobile => Category::Mobile,
            CliCategory::Other => Category::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliSyntax {
    Generic,
    Ucm,
}

impl From<CliSyntax> for PatternSyntax {
    fn from(value: CliSyntax) -> Self {
        match value {
            CliSyntax::Generic => PatternSyntax::Generic,
            CliSyntax::Ucm => PatternSyntax::Ucm,
        }
    }
}
