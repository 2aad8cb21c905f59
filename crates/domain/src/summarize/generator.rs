use mx_numplan_shared_kernel::{DomainError, DomainResult};

use crate::model::{DigitSet, MergedInterval, Pattern};

/// Express `interval` as the dial patterns matching exactly its numerals.
///
/// Works digit by digit from the most significant position: below the first
/// position where the bounds differ the interval splits into a low band, a
/// bracketed middle band and a high band. Any band whose tail spans the full
/// `0..=9` range at every remaining position collapses into wildcards, which
/// keeps the result at most `2 * (L - 1) + 1` patterns. Patterns are pairwise
/// disjoint and returned in ascending numeric order.
pub fn generate_patterns(interval: &MergedInterval) -> DomainResult<Vec<Pattern>> {
    let (start, end) = (interval.start(), interval.end());
    if start.digits() != end.digits() {
        return Err(DomainError::invalid_range(format!(
            "bounds {start} and {end} have different digit lengths"
        )));
    }
    if start > end {
        return Err(DomainError::invalid_range(format!("start {start} is after end {end}")));
    }

    let (low, high) = (start.digit_values(), end.digit_values());
    let mut prefix = Vec::with_capacity(low.len());
    let mut patterns = Vec::new();
    if let Err(err) = decompose(&mut prefix, &low, &high, &mut patterns) {
        log::error!("pattern generation failed for {start}-{end} ({}): {err}", interval.category());
        return Err(err);
    }

    log::trace!("{start}-{end} -> {} patterns", patterns.len());
    Ok(patterns)
}

fn decompose(
    prefix: &mut Vec<DigitSet>,
    low: &[u8],
    high: &[u8],
    out: &mut Vec<Pattern>,
) -> DomainResult<()> {
    let base = prefix.len();
    let shared = low.iter().zip(high).take_while(|(l, h)| l == h).count();
    prefix.extend(low[..shared].iter().map(|&d| DigitSet::Digit(d)));

    if shared == low.len() {
        out.push(Pattern::from_positions(prefix.clone()));
        prefix.truncate(base);
        return Ok(());
    }

    let (first, last) = (low[shared], high[shared]);
    if first >= last {
        return Err(DomainError::invariant(
            "generate_patterns",
            format!(
                "bounds {low:?} and {high:?} diverge at position {shared} with {first} >= {last}"
            ),
        ));
    }

    let (low_tail, high_tail) = (&low[shared + 1..], &high[shared + 1..]);
    let width = low_tail.len();
    let low_full = low_tail.iter().all(|&d| d == 0);
    let high_full = high_tail.iter().all(|&d| d == 9);

    // Full boundary bands fold into the bracket instead of getting their own pattern.
    let band_low = if low_full { first } else { first + 1 };
    let band_high = if high_full { last } else { last - 1 };

    if !low_full {
        prefix.push(DigitSet::Digit(first));
        decompose(prefix, low_tail, &vec![9; width], out)?;
        prefix.pop();
    }

    if band_low <= band_high {
        let mut positions = prefix.clone();
        positions.push(DigitSet::spanning(band_low, band_high));
        positions.extend(std::iter::repeat_n(DigitSet::Any, width));
        out.push(Pattern::from_positions(positions));
    }

    if !high_full {
        prefix.push(DigitSet::Digit(last));
        decompose(prefix, &vec![0; width], high_tail, out)?;
        prefix.pop();
    }

    prefix.truncate(base);
    Ok(())
}
