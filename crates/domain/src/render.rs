use std::{fmt, str::FromStr};

use mx_numplan_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

use crate::model::{DigitSet, Pattern};

/// Dial plan dialect used when emitting patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSyntax {
    /// `*` wildcard, no international prefix.
    Generic,
    /// Call manager translation/route pattern syntax: `X` wildcard, escaped `\+` prefix.
    #[default]
    Ucm,
}

impl PatternSyntax {
    const fn wildcard(self) -> char {
        match self {
            Self::Generic => '*',
            Self::Ucm => 'X',
        }
    }

    /// Render `pattern`, prepending `prefix` verbatim.
    pub fn render(self, pattern: &Pattern, prefix: &str) -> String {
        let mut out = String::with_capacity(prefix.len() + pattern.len() + 8);
        out.push_str(prefix);
        for set in pattern.positions() {
            match set {
                DigitSet::Any => out.push(self.wildcard()),
                other => out.push_str(&other.to_string()),
            }
        }
        out
    }

    /// Strip `prefix` from a rendered pattern and parse the remainder.
    pub fn parse(self, rendered: &str, prefix: &str) -> Result<Pattern, DomainError> {
        let body = rendered.strip_prefix(prefix).ok_or_else(|| DomainError::InvalidPattern {
            pattern: rendered.to_string(),
            details: format!("expected prefix '{prefix}'"),
        })?;
        body.parse()
    }
}

impl fmt::Display for PatternSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "generic",
            Self::Ucm => "ucm",
        })
    }
}

impl FromStr for PatternSyntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "ucm" => Ok(Self::Ucm),
            other => Err(format!("Unknown pattern syntax: {other}")),
        }
    }
}
