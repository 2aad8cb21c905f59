// crates/shared-kernel/src/value_objects/numeral.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// Fixed number of digits shared by every numeral of one summarization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DigitLength(u8);

impl DigitLength {
    /// Upper bound keeping `10^L` (the successor of the all-9s numeral) inside `u64`.
    pub const MAX: u8 = 18;

    /// Closed national numbering plan used in Mexico since August 2019.
    pub const MEXICO: Self = Self(10);

    pub fn new(digits: u8) -> DomainResult<Self> {
        if digits == 0 || digits > Self::MAX {
            return Err(DomainError::invalid_range(format!(
                "digit length must be between 1 and {}, got {digits}",
                Self::MAX
            )));
        }
        Ok(Self(digits))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Number of distinct numerals of this length (`10^L`).
    #[inline]
    pub const fn span(self) -> u64 {
        10u64.pow(self.0 as u32)
    }

    /// Largest numeric value representable with this length (all 9s).
    #[inline]
    pub const fn max_value(self) -> u64 {
        self.span() - 1
    }
}

impl Default for DigitLength {
    fn default() -> Self {
        Self::MEXICO
    }
}

impl TryFrom<u8> for DigitLength {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DigitLength> for u8 {
    fn from(value: DigitLength) -> Self {
        value.0
    }
}

impl fmt::Display for DigitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An L-digit national number with significant leading zeros.
///
/// Ordering compares the numeric value first; numerals of different lengths are
/// never mixed inside one run, so that order matches the lexicographic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral {
    value: u64,
    digits: DigitLength,
}

impl Numeral {
    /// Parse `text` as a numeral of exactly `digits` ASCII digits.
    pub fn parse(text: &str, digits: DigitLength) -> DomainResult<Self> {
        if text.len() != digits.as_usize() {
            return Err(DomainError::invalid_range(format!(
                "numeral '{text}' has {} digits, expected {digits}",
                text.len()
            )));
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_range(format!(
                "numeral '{text}' contains non-digit characters"
            )));
        }
        // Length and charset are checked, so this cannot overflow for L <= 18.
        let value = text.bytes().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
        Ok(Self { value, digits })
    }

    pub fn from_value(value: u64, digits: DigitLength) -> DomainResult<Self> {
        if value > digits.max_value() {
            return Err(DomainError::invalid_range(format!(
                "value {value} does not fit in {digits} digits"
            )));
        }
        Ok(Self { value, digits })
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    #[inline]
    pub const fn digits(self) -> DigitLength {
        self.digits
    }

    /// All-zeros numeral of the given length.
    pub const fn min(digits: DigitLength) -> Self {
        Self { value: 0, digits }
    }

    /// All-nines numeral of the given length.
    pub const fn max(digits: DigitLength) -> Self {
        Self { value: digits.max_value(), digits }
    }

    #[inline]
    pub const fn is_max(self) -> bool {
        self.value == self.digits.max_value()
    }

    /// Next numeral, or `None` for the all-9s numeral.
    pub const fn successor(self) -> Option<Self> {
        if self.is_max() {
            None
        } else {
            Some(Self { value: self.value + 1, digits: self.digits })
        }
    }

    /// Previous numeral, or `None` for the all-0s numeral.
    pub const fn predecessor(self) -> Option<Self> {
        if self.value == 0 {
            None
        } else {
            Some(Self { value: self.value - 1, digits: self.digits })
        }
    }

    /// Digits from most to least significant.
    pub fn digit_values(self) -> Vec<u8> {
        let len = self.digits.as_usize();
        let mut out = vec![0u8; len];
        let mut rest = self.value;
        for slot in out.iter_mut().rev() {
            // `rest % 10` is always < 10.
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        out
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.digits.as_usize())
    }
}

impl FromStr for Numeral {
    type Err = DomainError;

    /// Infers the digit length from the text itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = u8::try_from(s.len())
            .map_err(|_| DomainError::invalid_range(format!("numeral '{s}' is too long")))?;
        Self::parse(s, DigitLength::new(len)?)
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Numeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(n: u8) -> DigitLength {
        DigitLength::new(n).unwrap()
    }

    #[test]
    fn parse_keeps_leading_zeros() {
        let n = Numeral::parse("0042", len(4)).unwrap();
        assert_eq!(n.value(), 42);
        assert_eq!(n.to_string(), "0042");
        assert_eq!(n.digit_values(), vec![0, 0, 4, 2]);
    }

    #[test]
    fn parse_rejects_wrong_length_and_non_digits() {
        assert!(Numeral::parse("123", len(4)).is_err());
        assert!(Numeral::parse("12a4", len(4)).is_err());
        assert!(Numeral::parse("+123", len(4)).is_err());
    }

    #[test]
    fn successor_stops_at_all_nines() {
        let max = Numeral::max(len(3));
        assert_eq!(max.to_string(), "999");
        assert!(max.successor().is_none());
        assert_eq!(Numeral::parse("099", len(3)).unwrap().successor().unwrap().to_string(), "100");
        assert!(Numeral::min(len(3)).predecessor().is_none());
    }

    #[test]
    fn digit_length_bounds() {
        assert!(DigitLength::new(0).is_err());
        assert!(DigitLength::new(19).is_err());
        assert_eq!(DigitLength::new(18).unwrap().max_value(), 999_999_999_999_999_999);
    }

    #[test]
    fn serde_uses_the_padded_text() {
        let n = Numeral::parse("0550000000", DigitLength::MEXICO).unwrap();
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"0550000000\"");
        let back: Numeral = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
