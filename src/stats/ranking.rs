use crate::core::Entry;

/// Which side of the scoreboard to rank on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsStat {
    /// Points scored, most is best.
    Scored,
    /// Points allowed, fewest is best.
    Allowed,
}

impl PointsStat {
    fn value(&self, entry: &Entry) -> u32 {
        match self {
            PointsStat::Scored => entry.stats.points.scored,
            PointsStat::Allowed => entry.stats.points.allowed,
        }
    }
}

/// Competition style ("1224") ranks for `entries`, returned in input order.
///
/// Equal values share the rank of the first of them and the next distinct
/// value skips ahead by the size of the tie.
pub fn competition_ranks(entries: &[Entry], stat: PointsStat) -> Vec<u32> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|a, b| {
        let (va, vb) = (stat.value(&entries[*a]), stat.value(&entries[*b]));
        match stat {
            PointsStat::Scored => vb.cmp(&va),
            PointsStat::Allowed => va.cmp(&vb),
        }
    });

    let mut ranks = vec![0; entries.len()];
    let mut previous: Option<u32> = None;
    let mut rank = 0;
    for (pos, idx) in order.into_iter().enumerate() {
        let v = stat.value(&entries[idx]);
        if previous != Some(v) {
            rank = pos as u32 + 1;
            previous = Some(v);
        }
        ranks[idx] = rank;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Conference, Region, TeamIdentity};

    fn entry(name: &str, scored: u32, allowed: u32) -> Entry {
        let mut e = Entry::new(TeamIdentity::new(name, Conference::Nfc, Region::West));
        e.stats.points.scored = scored;
        e.stats.points.allowed = allowed;
        e
    }

    #[test]
    fn test_ties_share_a_rank() {
        let entries = vec![
            entry("A", 10, 5),
            entry("B", 30, 5),
            entry("C", 10, 1),
            entry("D", 3, 9),
        ];
        assert_eq!(vec![2, 1, 2, 4], competition_ranks(&entries, PointsStat::Scored));
        assert_eq!(vec![2, 2, 1, 4], competition_ranks(&entries, PointsStat::Allowed));
    }

    #[test]
    fn test_empty() {
        assert!(competition_ranks(&[], PointsStat::Scored).is_empty());
    }
}
