use std::collections::BTreeMap;

use mx_numplan_shared_kernel::{Category, DomainError, DomainResult};

use crate::model::{MergedInterval, NumberRange};

/// Split raw ranges by category, preserving input order inside each group.
pub fn partition_by_category(ranges: &[NumberRange]) -> BTreeMap<Category, Vec<NumberRange>> {
    let mut groups: BTreeMap<Category, Vec<NumberRange>> = BTreeMap::new();
    for range in ranges {
        groups.entry(range.category()).or_default().push(*range);
    }
    groups
}

/// Collapse ranges of a single category into sorted, disjoint, non-adjacent intervals.
///
/// Overlapping and exactly adjacent ranges are fused the same way. Ranges of
/// mixed category or digit length are rejected; partition them first.
pub fn merge_ranges(ranges: &[NumberRange]) -> DomainResult<Vec<MergedInterval>> {
    let Some(first) = ranges.first() else {
        return Ok(Vec::new());
    };
    let (category, digits) = (first.category(), first.digits());

    if let Some(stray) = ranges.iter().find(|r| r.category() != category) {
        return Err(DomainError::invalid_range(format!(
            "range {}-{} is {} but the batch being merged is {category}",
            stray.start(),
            stray.end(),
            stray.category()
        )));
    }
    if let Some(stray) = ranges.iter().find(|r| r.digits() != digits) {
        return Err(DomainError::invalid_range(format!(
            "range {}-{} has {} digits but the batch being merged has {digits}",
            stray.start(),
            stray.end(),
            stray.digits()
        )));
    }

    let mut sorted = ranges.to_vec();
    sorted.sort();

    let mut merged = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(head) = iter.next() else {
        return Ok(merged);
    };
    let (mut cur_start, mut cur_end) = (head.start(), head.end());
    for range in iter {
        // An interval ending at all 9s has no successor and absorbs everything after it.
        let touches = cur_end.successor().is_none_or(|next| range.start() <= next);
        if touches {
            cur_end = cur_end.max(range.end());
        } else {
            merged.push(MergedInterval::from_checked(cur_start, cur_end, category));
            (cur_start, cur_end) = (range.start(), range.end());
        }
    }
    merged.push(MergedInterval::from_checked(cur_start, cur_end, category));

    log::debug!("merged {} {category} ranges into {} intervals", ranges.len(), merged.len());
    Ok(merged)
}
