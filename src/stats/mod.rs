//! Turns a [`LeagueSchedule`] into one [`Entry`] per team.
//!
//! Counting stats (records, points, streak) come straight from each
//! completed game. Strength of victory/schedule and the points ranks depend
//! on every other team, so they are filled in after all games are counted.
mod ranking;

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::core::{Conference, Entry, Game, League, LeagueSchedule, Outcome, Record, ScheduleError};

pub use ranking::{PointsStat, competition_ranks};

/// Build entries for every team in `league` from the completed games in
/// `schedule`. Entries come back in league table order.
#[instrument(level = "debug", skip_all, fields(teams = league.len()))]
pub fn create_entries(
    league: &League,
    schedule: &LeagueSchedule,
) -> Result<Vec<Entry>, ScheduleError> {
    let mut entries: Vec<Entry> = league.teams().iter().cloned().map(Entry::new).collect();
    let index: HashMap<String, usize> = entries
        .iter()
        .enumerate()
        .map(|(idx, e)| (e.name().to_string(), idx))
        .collect();

    for game in schedule.games() {
        let home_idx = *index
            .get(&game.home)
            .ok_or_else(|| ScheduleError::UnknownTeam(game.home.clone()))?;
        let away_idx = *index
            .get(&game.away)
            .ok_or_else(|| ScheduleError::UnknownTeam(game.away.clone()))?;
        if !game.completed {
            continue;
        }

        let same_division = entries[home_idx].team.same_division(&entries[away_idx].team);
        let same_conference = entries[home_idx].team.same_conference(&entries[away_idx].team);

        for idx in [home_idx, away_idx] {
            add_game(&mut entries[idx], game, same_division, same_conference);
        }
    }

    let records: HashMap<String, Record> = entries
        .iter()
        .map(|e| (e.name().to_string(), e.stats.record))
        .collect();

    for entry in entries.iter_mut() {
        let (victory, schedule_strength) = strength_of(entry.name(), schedule, &records);
        entry.stats.strength_of_victory = victory;
        entry.stats.strength_of_schedule = schedule_strength;
    }

    assign_point_ranks(&mut entries);

    debug!(games = schedule.games().filter(|g| g.completed).count(), "Created entries");
    Ok(entries)
}

fn add_game(entry: &mut Entry, game: &Game, same_division: bool, same_conference: bool) {
    let name = entry.team.name.as_str();
    let Some(outcome) = game.outcome_for(name) else {
        return;
    };
    let (Some(scored), Some(allowed)) = (game.points_for(name), game.points_against(name)) else {
        return;
    };
    let stats = &mut entry.stats;

    stats.record.add_outcome(outcome);
    if game.is_home(name) {
        stats.home_record.add_outcome(outcome);
    } else {
        stats.away_record.add_outcome(outcome);
    }
    if same_division {
        stats.division_record.add_outcome(outcome);
    }

    stats.points.add(scored, allowed);
    if same_conference {
        stats.conference_record.add_outcome(outcome);
        stats.conference_points.add(scored, allowed);
    }

    stats.streak = match outcome {
        Outcome::Win if stats.streak > 0 => stats.streak + 1,
        Outcome::Win => 1,
        Outcome::Loss if stats.streak < 0 => stats.streak - 1,
        Outcome::Loss => -1,
        Outcome::Tie => 0,
    };
}

/// Strength of victory and strength of schedule for `team`.
///
/// Opponents are counted once per game, so a division rival beaten twice
/// adds its record twice.
fn strength_of(
    team: &str,
    schedule: &LeagueSchedule,
    records: &HashMap<String, Record>,
) -> (f64, f64) {
    let mut victory = Record::default();
    let mut all = Record::default();

    for game in schedule.games().filter(|g| g.completed) {
        let Some(opponent) = game.opponent_of(team) else {
            continue;
        };
        let Some(opponent_record) = records.get(opponent) else {
            continue;
        };
        all.add(opponent_record);
        if game.winner() == Some(team) {
            victory.add(opponent_record);
        }
    }

    (victory.win_percentage(), all.win_percentage())
}

fn assign_point_ranks(entries: &mut [Entry]) {
    let league_for = competition_ranks(entries, PointsStat::Scored);
    let league_against = competition_ranks(entries, PointsStat::Allowed);
    for (entry, (pf, pa)) in entries.iter_mut().zip(league_for.into_iter().zip(league_against)) {
        entry.stats.league_rank_points_for = pf;
        entry.stats.league_rank_points_against = pa;
    }

    for conference in Conference::ALL {
        let members: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.conference() == conference)
            .map(|(idx, _)| idx)
            .collect();
        let subset: Vec<Entry> = members.iter().map(|idx| entries[*idx].clone()).collect();

        let conf_for = competition_ranks(&subset, PointsStat::Scored);
        let conf_against = competition_ranks(&subset, PointsStat::Allowed);
        for (pos, idx) in members.iter().enumerate() {
            entries[*idx].stats.conference_rank_points_for = conf_for[pos];
            entries[*idx].stats.conference_rank_points_against = conf_against[pos];
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn find<'a>(entries: &'a [Entry], name: &str) -> &'a Entry {
        entries.iter().find(|e| e.name() == name).unwrap()
    }

    #[test]
    fn test_records_and_points() {
        let league = League::nfl();
        let mut schedule = LeagueSchedule::new(3);
        schedule
            // Division game, Jets win on the road
            .add_game(0, Game::final_score("Buffalo Bills", "New York Jets", 17, 20))
            .unwrap()
            // Conference game, Jets lose at home
            .add_game(1, Game::final_score("New York Jets", "Houston Texans", 10, 13))
            .unwrap()
            // Interconference tie
            .add_game(2, Game::final_score("New York Giants", "New York Jets", 7, 7))
            .unwrap();

        let entries = create_entries(&league, &schedule).unwrap();
        assert_eq!(32, entries.len());

        let jets = &find(&entries, "New York Jets").stats;
        assert_eq!(Record::new(1, 1, 1), jets.record);
        assert_eq!(Record::new(0, 1, 0), jets.home_record);
        assert_eq!(Record::new(1, 0, 1), jets.away_record);
        assert_eq!(Record::new(1, 0, 0), jets.division_record);
        assert_eq!(Record::new(1, 1, 0), jets.conference_record);
        assert_eq!(37, jets.points.scored);
        assert_eq!(37, jets.points.allowed);
        assert_eq!(30, jets.conference_points.scored);
        assert_eq!(30, jets.conference_points.allowed);
        assert_eq!(0, jets.streak);
    }

    #[test]
    fn test_unplayed_games_are_ignored() {
        let league = League::nfl();
        let mut schedule = LeagueSchedule::new(1);
        schedule
            .add_game(0, Game::scheduled("Buffalo Bills", "New York Jets"))
            .unwrap();

        let entries = create_entries(&league, &schedule).unwrap();
        assert_eq!(0, find(&entries, "Buffalo Bills").stats.record.games_played());
    }

    #[test]
    fn test_streaks() {
        let league = League::nfl();
        let mut schedule = LeagueSchedule::new(4);
        schedule
            .add_game(0, Game::final_score("Buffalo Bills", "Miami Dolphins", 10, 3))
            .unwrap()
            .add_game(1, Game::final_score("Miami Dolphins", "Buffalo Bills", 3, 10))
            .unwrap()
            .add_game(2, Game::final_score("Buffalo Bills", "New York Jets", 0, 3))
            .unwrap()
            .add_game(3, Game::final_score("New York Jets", "Buffalo Bills", 9, 3))
            .unwrap();

        let entries = create_entries(&league, &schedule).unwrap();
        assert_eq!(-2, find(&entries, "Buffalo Bills").stats.streak);
        assert_eq!(-2, find(&entries, "Miami Dolphins").stats.streak);
        assert_eq!(2, find(&entries, "New York Jets").stats.streak);
    }

    #[test]
    fn test_strength_of_victory_and_schedule() {
        let league = League::nfl();
        let mut schedule = LeagueSchedule::new(2);
        schedule
            // Patriots beat the Cardinals who then beat the Giants
            .add_game(0, Game::final_score("Arizona Cardinals", "New England Patriots", 10, 20))
            .unwrap()
            .add_game(0, Game::final_score("New York Giants", "Seattle Seahawks", 0, 3))
            .unwrap()
            .add_game(1, Game::final_score("New York Giants", "Arizona Cardinals", 6, 9))
            .unwrap()
            // Patriots lose to the Seahawks
            .add_game(1, Game::final_score("New England Patriots", "Seattle Seahawks", 3, 13))
            .unwrap();

        let entries = create_entries(&league, &schedule).unwrap();
        let pats = &find(&entries, "New England Patriots").stats;

        // Beat the 1-1 Cardinals.
        assert_relative_eq!(0.5, pats.strength_of_victory);
        // Played the 1-1 Cardinals and the 2-0 Seahawks.
        assert_relative_eq!(0.75, pats.strength_of_schedule);

        let giants = &find(&entries, "New York Giants").stats;
        assert_relative_eq!(0.0, giants.strength_of_victory);
    }

    #[test]
    fn test_point_ranks() {
        let league = League::nfl();
        let mut schedule = LeagueSchedule::new(1);
        schedule
            .add_game(0, Game::final_score("Arizona Cardinals", "New England Patriots", 30, 40))
            .unwrap()
            .add_game(0, Game::final_score("New York Giants", "New York Jets", 17, 20))
            .unwrap();

        let entries = create_entries(&league, &schedule).unwrap();
        let pats = &find(&entries, "New England Patriots").stats;
        let jets = &find(&entries, "New York Jets").stats;
        let cards = &find(&entries, "Arizona Cardinals").stats;

        assert_eq!(1, pats.league_rank_points_for);
        assert_eq!(2, cards.league_rank_points_for);
        assert_eq!(3, jets.league_rank_points_for);

        // 28 teams have allowed zero points and share the top rank.
        assert_eq!(29, jets.league_rank_points_against);
        assert_eq!(31, pats.league_rank_points_against);
        assert_eq!(32, cards.league_rank_points_against);

        assert_eq!(1, pats.conference_rank_points_for);
        assert_eq!(2, jets.conference_rank_points_for);
        assert_eq!(1, cards.conference_rank_points_for);
        assert_eq!(15, jets.conference_rank_points_against);
        assert_eq!(16, pats.conference_rank_points_against);
    }

    #[test]
    fn test_unknown_team() {
        let league = League::nfl();
        let mut schedule = LeagueSchedule::new(1);
        schedule
            .add_game(0, Game::final_score("Buffalo Bills", "Frankfurt Galaxy", 3, 0))
            .unwrap();
        assert_eq!(
            ScheduleError::UnknownTeam("Frankfurt Galaxy".to_string()),
            create_entries(&league, &schedule).unwrap_err()
        );
    }
}
