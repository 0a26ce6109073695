use crate::core::Entry;

/// Order `entries` by `scores` (best first) and split them into runs of
/// equal score.
///
/// `scores` is aligned with `entries`. The sort is stable, so tied entries
/// keep their incoming order, and the runs are returned best first. The
/// runs always cover every entry exactly once.
pub fn group_entries(entries: &[Entry], scores: &[f64]) -> Vec<Vec<Entry>> {
    debug_assert_eq!(entries.len(), scores.len());

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|a, b| {
        scores[*b]
            .partial_cmp(&scores[*a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut groups: Vec<Vec<Entry>> = Vec::new();
    let mut current_score: Option<f64> = None;
    for idx in order {
        let score = scores[idx];
        match (groups.last_mut(), current_score) {
            (Some(group), Some(prev)) if prev == score => group.push(entries[idx].clone()),
            _ => {
                groups.push(vec![entries[idx].clone()]);
                current_score = Some(score);
            }
        }
    }
    groups
}

/// Split into per-division groups, in order of first appearance.
pub fn group_by_division(entries: &[Entry]) -> Vec<Vec<Entry>> {
    group_by_key(entries, |e| e.division())
}

/// Split into per-conference groups, in order of first appearance.
pub fn group_by_conference(entries: &[Entry]) -> Vec<Vec<Entry>> {
    group_by_key(entries, |e| e.conference())
}

fn group_by_key<K: PartialEq>(entries: &[Entry], key: impl Fn(&Entry) -> K) -> Vec<Vec<Entry>> {
    let mut keys: Vec<K> = Vec::new();
    let mut groups: Vec<Vec<Entry>> = Vec::new();
    for entry in entries {
        let k = key(entry);
        match keys.iter().position(|seen| *seen == k) {
            Some(pos) => groups[pos].push(entry.clone()),
            None => {
                keys.push(k);
                groups.push(vec![entry.clone()]);
            }
        }
    }
    groups
}
