use std::cmp::Ordering;

use serde::Serialize;

use crate::model::Pattern;

/// Patterns present in only one of two pattern lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatternListDiff {
    pub added: Vec<Pattern>,
    pub removed: Vec<Pattern>,
}

impl PatternListDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Merge-walk two pattern lists; both are sorted and de-duplicated first.
pub fn compare_pattern_lists(old: &[Pattern], new: &[Pattern]) -> PatternListDiff {
    let old = sorted_unique(old);
    let new = sorted_unique(new);

    let mut diff = PatternListDiff::default();
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        match old[i].cmp(&new[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                diff.removed.push(old[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                diff.added.push(new[j].clone());
                j += 1;
            }
        }
    }
    diff.removed.extend_from_slice(&old[i..]);
    diff.added.extend_from_slice(&new[j..]);
    diff
}

fn sorted_unique(patterns: &[Pattern]) -> Vec<Pattern> {
    let mut out = patterns.to_vec();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(items: &[&str]) -> Vec<Pattern> {
        items.iter().map(|p| p.parse().unwrap()).collect()
    }

    #[test]
    fn reports_both_directions() {
        let old = patterns(&["1***", "2[0-4]**", "7***"]);
        let new = patterns(&["1***", "2[0-5]**"]);
        let diff = compare_pattern_lists(&old, &new);
        assert_eq!(diff.added, patterns(&["2[0-5]**"]));
        assert_eq!(diff.removed, patterns(&["2[0-4]**", "7***"]));
    }

    #[test]
    fn unsorted_input_is_handled() {
        let old = patterns(&["9***", "1***"]);
        let new = patterns(&["1***", "9***"]);
        assert!(compare_pattern_lists(&old, &new).is_empty());
    }

    #[test]
    fn empty_sides() {
        let some = patterns(&["55******"]);
        assert_eq!(compare_pattern_lists(&[], &some).added, some);
        assert_eq!(compare_pattern_lists(&some, &[]).removed, some);
    }
}
