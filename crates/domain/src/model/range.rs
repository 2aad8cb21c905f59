use std::cmp::Ordering;

use mx_numplan_shared_kernel::{Category, DigitLength, DomainError, DomainResult, Numeral};
use serde::Serialize;

/// One carrier-assigned block of national numbers, as read from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NumberRange {
    start: Numeral,
    end: Numeral,
    category: Category,
}

impl NumberRange {
    pub fn new(start: Numeral, end: Numeral, category: Category) -> DomainResult<Self> {
        check_bounds(start, end)?;
        Ok(Self { start, end, category })
    }

    /// Validate and build a range from two L-digit numerals.
    pub fn parse(
        start: &str,
        end: &str,
        category: Category,
        digits: DigitLength,
    ) -> DomainResult<Self> {
        let start = Numeral::parse(start, digits)?;
        let end = Numeral::parse(end, digits)?;
        Self::new(start, end, category)
    }

    pub(crate) const fn from_checked(start: Numeral, end: Numeral, category: Category) -> Self {
        Self { start, end, category }
    }

    #[inline]
    pub const fn start(&self) -> Numeral {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> Numeral {
        self.end
    }

    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub const fn digits(&self) -> DigitLength {
        self.start.digits()
    }

    pub fn contains(&self, numeral: Numeral) -> bool {
        numeral.digits() == self.digits() && self.start <= numeral && numeral <= self.end
    }

    /// Count of numerals inside the range.
    pub const fn len(&self) -> u64 {
        self.end.value() - self.start.value() + 1
    }

    /// A range always holds at least its start numeral.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl PartialOrd for NumberRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumberRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
            .then_with(|| self.category.cmp(&other.category))
    }
}

pub(crate) fn check_bounds(start: Numeral, end: Numeral) -> DomainResult<()> {
    if start.digits() != end.digits() {
        return Err(DomainError::invalid_range(format!(
            "bounds {start} and {end} have different digit lengths"
        )));
    }
    if start > end {
        return Err(DomainError::invalid_range(format!("start {start} is after end {end}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> DigitLength {
        DigitLength::new(4).unwrap()
    }

    #[test]
    fn parse_validates_bounds() {
        assert!(NumberRange::parse("1000", "1999", Category::Mobile, four()).is_ok());
        assert!(NumberRange::parse("1999", "1000", Category::Mobile, four()).is_err());
        assert!(NumberRange::parse("100", "1999", Category::Mobile, four()).is_err());
        assert!(NumberRange::parse("10x0", "1999", Category::Mobile, four()).is_err());
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        let start: Numeral = "100".parse().unwrap();
        let end: Numeral = "1999".parse().unwrap();
        assert!(NumberRange::new(start, end, Category::Other).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let range = NumberRange::parse("0100", "0199", Category::Mobile, four()).unwrap();
        assert!(range.contains("0100".parse().unwrap()));
        assert!(range.contains("0199".parse().unwrap()));
        assert!(!range.contains("0200".parse().unwrap()));
        assert!(!range.contains("100".parse().unwrap()));
        assert_eq!(range.len(), 100);
    }

    #[test]
    fn ordering_is_start_then_end() {
        let a = NumberRange::parse("1000", "1500", Category::Mobile, four()).unwrap();
        let b = NumberRange::parse("1000", "1999", Category::Mobile, four()).unwrap();
        let c = NumberRange::parse("0999", "2000", Category::Mobile, four()).unwrap();
        let mut ranges = vec![b, a, c];
        ranges.sort();
        assert_eq!(ranges, vec![c, a, b]);
    }
}
