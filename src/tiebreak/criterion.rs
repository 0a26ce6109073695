use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom};
use tracing::{instrument, trace};

use super::config::TiebreakConfig;
use super::errors::TiebreakError;
use crate::core::{Entry, Record, Schedules, TeamSchedule};

/// Score returned by [`Criterion::CommonGamesMinimum`] for every team when
/// the group hasn't played enough common games.
pub const NOT_ENOUGH_COMMON_GAMES: f64 = -1.0;

/// A single comparison used to order tied teams.
///
/// Every criterion turns a group into one score per team where higher is
/// better. Scores are computed from the group as it is right now; a
/// head-to-head score for three teams says nothing about the same teams in a
/// group of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    WinPercentage,
    HeadToHead,
    /// 1.0 for a team that beat everyone else in the group, 0.0 for one
    /// that lost to everyone, 0.5 otherwise.
    HeadToHeadSweep,
    DivisionRecord,
    ConferenceRecord,
    CommonGames,
    /// Like [`Criterion::CommonGames`] but only applies once every team has
    /// played `min_common_games` common games.
    CommonGamesMinimum,
    StrengthOfVictory,
    StrengthOfSchedule,
    CombinedRankConference,
    CombinedRankLeague,
    NetPointsCommonGames,
    NetPointsConference,
    NetPoints,
    CoinToss,
}

impl Criterion {
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::WinPercentage => "Win Percentage",
            Criterion::HeadToHead => "Head to Head",
            Criterion::HeadToHeadSweep => "Head to Head Sweep",
            Criterion::DivisionRecord => "Division Record",
            Criterion::ConferenceRecord => "Conference Record",
            Criterion::CommonGames => "Common Games",
            Criterion::CommonGamesMinimum => "Common Games (minimum)",
            Criterion::StrengthOfVictory => "Strength of Victory",
            Criterion::StrengthOfSchedule => "Strength of Schedule",
            Criterion::CombinedRankConference => "Combined Rank Conference",
            Criterion::CombinedRankLeague => "Combined Rank League",
            Criterion::NetPointsCommonGames => "Net Points in Common Games",
            Criterion::NetPointsConference => "Net Points in Conference Games",
            Criterion::NetPoints => "Net Points",
            Criterion::CoinToss => "Coin Toss",
        }
    }

    /// Score every team in `group`. The result is aligned with `group`.
    #[instrument(level = "trace", skip_all, fields(criterion = self.name(), teams = group.len()))]
    pub fn scores<R: Rng>(
        &self,
        group: &[Entry],
        schedules: &Schedules,
        config: &TiebreakConfig,
        rng: &mut R,
    ) -> Result<Vec<f64>, TiebreakError> {
        let scores = match self {
            Criterion::WinPercentage => from_stats(group, |e| e.stats.record.win_percentage()),
            Criterion::HeadToHead => head_to_head_records(group, schedules)?
                .iter()
                .map(Record::win_percentage)
                .collect(),
            Criterion::HeadToHeadSweep => {
                let needed = (group.len() as u32).saturating_sub(1);
                head_to_head_records(group, schedules)?
                    .iter()
                    .map(|record| {
                        if record.games_played() != needed {
                            0.5
                        } else if record.wins == needed {
                            1.0
                        } else if record.losses == needed {
                            0.0
                        } else {
                            0.5
                        }
                    })
                    .collect()
            }
            Criterion::DivisionRecord => {
                from_stats(group, |e| e.stats.division_record.win_percentage())
            }
            Criterion::ConferenceRecord => {
                from_stats(group, |e| e.stats.conference_record.win_percentage())
            }
            Criterion::CommonGames => common_games_records(group, schedules)?
                .iter()
                .map(Record::win_percentage)
                .collect(),
            Criterion::CommonGamesMinimum => {
                let records = common_games_records(group, schedules)?;
                if records
                    .iter()
                    .any(|r| r.games_played() < config.min_common_games)
                {
                    trace!(
                        min_common_games = config.min_common_games,
                        "Not enough common games, skipping"
                    );
                    vec![NOT_ENOUGH_COMMON_GAMES; group.len()]
                } else {
                    records.iter().map(Record::win_percentage).collect()
                }
            }
            Criterion::StrengthOfVictory => from_stats(group, |e| e.stats.strength_of_victory),
            Criterion::StrengthOfSchedule => from_stats(group, |e| e.stats.strength_of_schedule),
            Criterion::CombinedRankConference => from_stats(group, |e| {
                let stats = &e.stats;
                -f64::from(stats.conference_rank_points_for + stats.conference_rank_points_against)
            }),
            Criterion::CombinedRankLeague => from_stats(group, |e| {
                -f64::from(e.stats.league_rank_points_for + e.stats.league_rank_points_against)
            }),
            Criterion::NetPointsCommonGames => net_points_common_games(group, schedules)?,
            Criterion::NetPointsConference => {
                from_stats(group, |e| e.stats.conference_points.differential() as f64)
            }
            Criterion::NetPoints => from_stats(group, |e| e.stats.points.differential() as f64),
            Criterion::CoinToss => {
                let mut toss: Vec<f64> = (0..group.len()).map(|i| i as f64).collect();
                toss.shuffle(rng);
                toss
            }
        };

        for (entry, score) in group.iter().zip(scores.iter()) {
            trace!(team = entry.name(), score, "Scored");
        }
        Ok(scores)
    }
}

fn from_stats(group: &[Entry], f: impl Fn(&Entry) -> f64) -> Vec<f64> {
    group.iter().map(f).collect()
}

fn schedules_for<'a>(
    group: &[Entry],
    schedules: &'a Schedules,
) -> Result<Vec<&'a TeamSchedule>, TiebreakError> {
    group
        .iter()
        .map(|e| {
            schedules
                .get(e.name())
                .ok_or_else(|| TiebreakError::MissingSchedule(e.name().to_string()))
        })
        .collect()
}

/// Records in completed games played between members of `group`.
///
/// A game is picked up from the home team's schedule only, so it is never
/// counted twice.
fn head_to_head_records(
    group: &[Entry],
    schedules: &Schedules,
) -> Result<Vec<Record>, TiebreakError> {
    let team_schedules = schedules_for(group, schedules)?;
    let position = |name: &str| group.iter().position(|e| e.name() == name);

    let mut records = vec![Record::default(); group.len()];
    for (home_idx, schedule) in team_schedules.iter().enumerate() {
        let home = group[home_idx].name();
        for game in schedule.completed_games().filter(|g| g.is_home(home)) {
            let Some(away_idx) = position(&game.away) else {
                continue;
            };
            if let (Some(home_outcome), Some(away_outcome)) =
                (game.outcome_for(home), game.outcome_for(&game.away))
            {
                records[home_idx].add_outcome(home_outcome);
                records[away_idx].add_outcome(away_outcome);
            }
        }
    }
    Ok(records)
}

/// Opponents every member of `group` has finished a game against. Members
/// of the group are never common opponents.
pub fn common_opponents<'a>(
    group: &[Entry],
    schedules: &'a Schedules,
) -> Result<BTreeSet<&'a str>, TiebreakError> {
    let team_schedules = schedules_for(group, schedules)?;
    let mut iter = team_schedules.into_iter();
    let Some(first) = iter.next() else {
        return Ok(BTreeSet::new());
    };

    let mut common = first.opponents();
    for schedule in iter {
        let theirs = schedule.opponents();
        common.retain(|opp| theirs.contains(opp));
    }
    common.retain(|opp| group.iter().all(|e| e.name() != *opp));
    Ok(common)
}

fn common_games_records(
    group: &[Entry],
    schedules: &Schedules,
) -> Result<Vec<Record>, TiebreakError> {
    let common = common_opponents(group, schedules)?;
    let team_schedules = schedules_for(group, schedules)?;

    Ok(group
        .iter()
        .zip(team_schedules)
        .map(|(entry, schedule)| {
            let mut record = Record::default();
            for opp in common.iter() {
                for outcome in schedule
                    .games_against(opp)
                    .filter_map(|g| g.outcome_for(entry.name()))
                {
                    record.add_outcome(outcome);
                }
            }
            record
        })
        .collect())
}

fn net_points_common_games(
    group: &[Entry],
    schedules: &Schedules,
) -> Result<Vec<f64>, TiebreakError> {
    let common = common_opponents(group, schedules)?;
    let team_schedules = schedules_for(group, schedules)?;

    Ok(group
        .iter()
        .zip(team_schedules)
        .map(|(entry, schedule)| {
            common
                .iter()
                .flat_map(|opp| schedule.games_against(opp))
                .map(|g| g.net_points(entry.name()))
                .sum::<i32>() as f64
        })
        .collect())
}
