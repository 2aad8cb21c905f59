use mx_numplan_shared_kernel::{Category, DigitLength, DomainResult, Numeral};
use serde::Serialize;

use super::range::{NumberRange, check_bounds};

/// A maximal contiguous block of one category.
///
/// Collections produced by the merger are sorted, pairwise disjoint and never
/// adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MergedInterval {
    start: Numeral,
    end: Numeral,
    category: Category,
}

impl MergedInterval {
    pub fn new(start: Numeral, end: Numeral, category: Category) -> DomainResult<Self> {
        check_bounds(start, end)?;
        Ok(Self { start, end, category })
    }

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

    /// Bounds already known to be ordered and of equal length.
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

    pub const fn len(&self) -> u64 {
        self.end.value() - self.start.value() + 1
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn to_range(&self) -> NumberRange {
        NumberRange::from_checked(self.start, self.end, self.category)
    }
}

impl From<MergedInterval> for NumberRange {
    fn from(value: MergedInterval) -> Self {
        value.to_range()
    }
}
