use std::collections::{BTreeSet, HashMap};

use super::errors::ScheduleError;
use super::game::Game;
use super::team::League;

/// Every team's schedule keyed by team name.
pub type Schedules = HashMap<String, TeamSchedule>;

/// One team's season, indexed by period. A `None` period is a bye.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSchedule {
    pub team: String,
    pub periods: Vec<Option<Game>>,
}

impl TeamSchedule {
    pub fn new(team: impl Into<String>, num_periods: usize) -> Self {
        Self {
            team: team.into(),
            periods: vec![None; num_periods],
        }
    }

    /// Completed games in period order.
    pub fn completed_games(&self) -> impl Iterator<Item = &Game> + '_ {
        self.periods
            .iter()
            .flatten()
            .filter(|game| game.completed)
    }

    /// Every team this one has finished a game against.
    pub fn opponents(&self) -> BTreeSet<&str> {
        self.completed_games()
            .filter_map(|game| game.opponent_of(&self.team))
            .collect()
    }

    /// All completed games against `opponent`. Division rivals show up
    /// twice.
    pub fn games_against<'a>(&'a self, opponent: &'a str) -> impl Iterator<Item = &'a Game> + 'a {
        self.completed_games()
            .filter(move |game| game.opponent_of(&self.team) == Some(opponent))
    }

    pub fn byes(&self) -> usize {
        self.periods.iter().filter(|p| p.is_none()).count()
    }
}

/// The league's games grouped by period. Unlike a [`TeamSchedule`] each game
/// is stored exactly once.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeagueSchedule {
    pub periods: Vec<Vec<Game>>,
}

impl LeagueSchedule {
    pub fn new(num_periods: usize) -> Self {
        Self {
            periods: vec![Vec::new(); num_periods],
        }
    }

    pub fn num_periods(&self) -> usize {
        self.periods.len()
    }

    /// Add a game to the zero indexed `period`.
    pub fn add_game(&mut self, period: usize, game: Game) -> Result<&mut Self, ScheduleError> {
        let num_periods = self.periods.len();
        if game.home == game.away {
            return Err(ScheduleError::SelfMatch(game.home));
        }
        let games = self
            .periods
            .get_mut(period)
            .ok_or(ScheduleError::InvalidPeriod {
                period,
                num_periods,
            })?;
        games.push(game);
        Ok(self)
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> + '_ {
        self.periods.iter().flatten()
    }

    /// Split into one schedule per league team. Teams without a game in a
    /// period get a bye there.
    pub fn split_to_teams(&self, league: &League) -> Result<Schedules, ScheduleError> {
        let mut schedules: Schedules = league
            .teams()
            .iter()
            .map(|team| {
                (
                    team.name.clone(),
                    TeamSchedule::new(team.name.clone(), self.periods.len()),
                )
            })
            .collect();

        for (period, games) in self.periods.iter().enumerate() {
            for game in games {
                for name in [&game.home, &game.away] {
                    let schedule = schedules
                        .get_mut(name)
                        .ok_or_else(|| ScheduleError::UnknownTeam(name.clone()))?;
                    let slot = &mut schedule.periods[period];
                    if slot.is_some() {
                        return Err(ScheduleError::DoubleBooked {
                            team: name.clone(),
                            period,
                        });
                    }
                    *slot = Some(game.clone());
                }
            }
        }

        Ok(schedules)
    }
}
