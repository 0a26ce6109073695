use super::record::{Points, Record};
use super::team::{Conference, Division, TeamIdentity};

/// Aggregated counting stats for one team.
///
/// Computed once per schedule snapshot by [`crate::stats::create_entries`]
/// and treated as read-only by the tiebreak engine, except for `seed` which
/// is filled in by seeding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatSheet {
    pub record: Record,
    pub home_record: Record,
    pub away_record: Record,
    pub division_record: Record,
    pub conference_record: Record,

    pub points: Points,
    pub conference_points: Points,

    /// Positive for a winning streak, negative for a losing streak, zero
    /// after a tie or before the first game.
    pub streak: i32,

    pub strength_of_victory: f64,
    pub strength_of_schedule: f64,

    // Ranks are 1 based. Tied values share a rank.
    pub conference_rank_points_for: u32,
    pub conference_rank_points_against: u32,
    pub league_rank_points_for: u32,
    pub league_rank_points_against: u32,

    pub seed: Option<u8>,
}

/// A team and its stats; the unit that gets sorted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub team: TeamIdentity,
    pub stats: StatSheet,
}

impl Entry {
    pub fn new(team: TeamIdentity) -> Self {
        Self {
            team,
            stats: StatSheet::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.team.name
    }

    pub fn division(&self) -> Division {
        self.team.division
    }

    pub fn conference(&self) -> Conference {
        self.team.conference()
    }

    pub fn win_percentage(&self) -> f64 {
        self.stats.record.win_percentage()
    }
}

/// Keep only the entries whose team name is in `names`, preserving the
/// order of `entries`.
pub fn filter_entries(entries: &[Entry], names: &[&str]) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| names.contains(&e.name()))
        .cloned()
        .collect()
}

/// Comma separated team names, handy for log fields.
pub fn team_names(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(Entry::name)
        .collect::<Vec<_>>()
        .join(", ")
}
