use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use mx_numplan_shared_kernel::{DigitLength, DomainError, DomainResult, Numeral};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Digits accepted at one pattern position.
///
/// Build values through [`DigitSet::new`], which normalizes a single-digit span to
/// [`DigitSet::Digit`] and the full `0..=9` span to [`DigitSet::Any`]. Equality,
/// ordering and hashing all go through the `(low, high)` bounds.
#[derive(Debug, Clone, Copy)]
pub enum DigitSet {
    Digit(u8),
    Range(u8, u8),
    Any,
}

impl DigitSet {
    pub fn new(low: u8, high: u8) -> DomainResult<Self> {
        if low > high || high > 9 {
            return Err(DomainError::InvalidPattern {
                pattern: format!("[{low}-{high}]"),
                details: "digit range must satisfy low <= high <= 9".to_string(),
            });
        }
        Ok(Self::spanning(low, high))
    }

    /// Caller guarantees `low <= high <= 9`.
    pub(crate) const fn spanning(low: u8, high: u8) -> Self {
        match (low, high) {
            (l, h) if l == h => Self::Digit(l),
            (0, 9) => Self::Any,
            (l, h) => Self::Range(l, h),
        }
    }

    pub const fn bounds(self) -> (u8, u8) {
        match self {
            Self::Digit(d) => (d, d),
            Self::Range(l, h) => (l, h),
            Self::Any => (0, 9),
        }
    }

    pub const fn contains(self, digit: u8) -> bool {
        let (low, high) = self.bounds();
        low <= digit && digit <= high
    }

    /// Number of digits accepted at this position.
    pub const fn len(self) -> u64 {
        let (low, high) = self.bounds();
        (high - low + 1) as u64
    }

    pub const fn is_empty(self) -> bool {
        false
    }
}

impl PartialEq for DigitSet {
    fn eq(&self, other: &Self) -> bool {
        self.bounds() == other.bounds()
    }
}

impl Eq for DigitSet {}

impl Hash for DigitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bounds().hash(state);
    }
}

impl PartialOrd for DigitSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bounds().cmp(&other.bounds())
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Range(l, h) => write!(f, "[{l}-{h}]"),
            Self::Any => f.write_str("*"),
        }
    }
}

/// A fixed-length dial pattern; it matches the Cartesian product of its positions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    positions: Vec<DigitSet>,
}

impl Pattern {
    pub fn new(positions: Vec<DigitSet>) -> DomainResult<Self> {
        if positions.is_empty() || positions.len() > usize::from(DigitLength::MAX) {
            return Err(DomainError::InvalidPattern {
                pattern: render_generic(&positions),
                details: format!("pattern must have between 1 and {} positions", DigitLength::MAX),
            });
        }
        Ok(Self { positions })
    }

    /// Positions are produced by the generator and are known to be well formed.
    pub(crate) const fn from_positions(positions: Vec<DigitSet>) -> Self {
        Self { positions }
    }

    /// Pattern matching exactly one numeral.
    pub fn literal(numeral: Numeral) -> Self {
        Self::from_positions(numeral.digit_values().into_iter().map(DigitSet::Digit).collect())
    }

    pub fn positions(&self) -> &[DigitSet] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn matches(&self, numeral: Numeral) -> bool {
        numeral.digits().as_usize() == self.len()
            && numeral
                .digit_values()
                .into_iter()
                .zip(&self.positions)
                .all(|(digit, set)| set.contains(digit))
    }

    /// How many numerals the pattern matches.
    pub fn covered_numbers(&self) -> u64 {
        self.positions.iter().map(|set| set.len()).product()
    }

    /// Lowest and highest numeral matched, as numeric values.
    pub fn value_bounds(&self) -> (u64, u64) {
        self.positions.iter().fold((0, 0), |(low, high), set| {
            let (l, h) = set.bounds();
            (low * 10 + u64::from(l), high * 10 + u64::from(h))
        })
    }
}

fn render_generic(positions: &[DigitSet]) -> String {
    positions.iter().map(ToString::to_string).collect()
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_generic(&self.positions))
    }
}

impl FromStr for Pattern {
    type Err = DomainError;

    /// Accepts digits, `*` or `X` for the wildcard, and `[d1-d2]` ranges.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |details: &str| DomainError::InvalidPattern {
            pattern: s.to_string(),
            details: details.to_string(),
        };

        let mut positions = Vec::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            let set = match c {
                '0'..='9' => DigitSet::Digit(c as u8 - b'0'),
                '*' | 'X' | 'x' => DigitSet::Any,
                '[' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        body.push(c);
                    }
                    if !closed {
                        return Err(invalid("unterminated digit range"));
                    }
                    let (low, high) =
                        body.split_once('-').ok_or_else(|| invalid("range needs a '-'"))?;
                    let digit = |text: &str| match text.as_bytes() {
                        [b @ b'0'..=b'9'] => Ok(b - b'0'),
                        _ => Err(invalid("range bounds must be single digits")),
                    };
                    DigitSet::new(digit(low)?, digit(high)?)
                        .map_err(|_| invalid("range bounds are inverted"))?
                }
                other => return Err(invalid(&format!("unexpected character '{other}'"))),
            };
            positions.push(set);
        }
        Self::new(positions)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
