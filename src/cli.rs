mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliCategory, CliOutputFormat, CliSyntax};
