// crates/shared-kernel/src/value_objects/category.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of network a number block is assigned to, decided once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Other,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::Mobile, Self::Other];

    /// Map the regulator's `TIPO_RED` column onto a category.
    pub fn from_network_type(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("MOVIL") { Self::Mobile } else { Self::Other }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "movil" => Ok(Self::Mobile),
            "other" | "fijo" => Ok(Self::Other),
            other => Err(DomainError::UnknownCategory { value: other.to_string() }),
        }
    }
}
