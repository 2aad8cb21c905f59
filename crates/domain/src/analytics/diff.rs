use std::collections::{BTreeMap, BTreeSet};

use mx_numplan_shared_kernel::{Category, DomainError, DomainResult};

use crate::model::{ChangeRecord, MergedInterval};

/// Report the sub-ranges that appear only in `old` (removed) or only in `new` (added).
///
/// Each side must be disjoint within every category, which is what
/// [`merge_ranges`](crate::merge_ranges) produces. Records come back ordered by
/// category, then start numeral.
pub fn diff_snapshots(
    old: &[MergedInterval],
    new: &[MergedInterval],
) -> DomainResult<Vec<ChangeRecord>> {
    let old_groups = group_checked(old, "old")?;
    let new_groups = group_checked(new, "new")?;

    let lengths: BTreeSet<_> = old.iter().chain(new).map(MergedInterval::digits).collect();
    if lengths.len() > 1 {
        log::error!("snapshot diff over mixed digit lengths {lengths:?}; old={old:?} new={new:?}");
        return Err(DomainError::invariant(
            "diff_snapshots",
            format!("mixed digit lengths {lengths:?}"),
        ));
    }

    let categories: BTreeSet<Category> =
        old_groups.keys().chain(new_groups.keys()).copied().collect();
    let mut records = Vec::new();
    for category in categories {
        let before = old_groups.get(&category).map_or(&[][..], Vec::as_slice);
        let after = new_groups.get(&category).map_or(&[][..], Vec::as_slice);
        records.extend(subtract(before, after).into_iter().map(ChangeRecord::removed));
        records.extend(subtract(after, before).into_iter().map(ChangeRecord::added));
    }
    records.sort_by_key(|r| (r.range.category(), r.range.start(), r.kind));
    Ok(records)
}

fn group_checked(
    intervals: &[MergedInterval],
    side: &'static str,
) -> DomainResult<BTreeMap<Category, Vec<MergedInterval>>> {
    let mut groups: BTreeMap<Category, Vec<MergedInterval>> = BTreeMap::new();
    for interval in intervals {
        groups.entry(interval.category()).or_default().push(*interval);
    }
    for group in groups.values_mut() {
        group.sort();
        if let Some(pair) = group.windows(2).find(|pair| pair[0].overlaps(&pair[1])) {
            let (first, second) = (fmt(&pair[0]), fmt(&pair[1]));
            log::error!(
                "{side} snapshot is not merged: {first} overlaps {second}; input={intervals:?}"
            );
            return Err(DomainError::invariant(
                "diff_snapshots",
                format!("{side} snapshot has overlapping intervals {first} and {second}"),
            ));
        }
    }
    Ok(groups)
}

fn fmt(interval: &MergedInterval) -> String {
    format!("{}-{}", interval.start(), interval.end())
}

/// `minuend - subtrahend` for sorted, disjoint interval lists of one category.
fn subtract(minuend: &[MergedInterval], subtrahend: &[MergedInterval]) -> Vec<MergedInterval> {
    let mut residue = Vec::new();
    let mut skip = 0;
    for interval in minuend {
        while skip < subtrahend.len() && subtrahend[skip].end() < interval.start() {
            skip += 1;
        }

        let mut cursor = Some(interval.start());
        for cut in subtrahend[skip..].iter().take_while(|cut| cut.start() <= interval.end()) {
            let Some(from) = cursor else { break };
            if cut.start() > from {
                if let Some(to) = cut.start().predecessor() {
                    residue.push(MergedInterval::from_checked(from, to, interval.category()));
                }
            }
            cursor = cut.end().successor();
        }

        if let Some(from) = cursor.filter(|from| *from <= interval.end()) {
            residue.push(MergedInterval::from_checked(from, interval.end(), interval.category()));
        }
    }
    residue
}
