use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum LeagueError {
    #[error("Team {0} appears more than once in the league table")]
    DuplicateTeam(String),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ScheduleError {
    #[error("Period {period} is outside of a {num_periods} period schedule")]
    InvalidPeriod { period: usize, num_periods: usize },

    #[error("Team {0} is not part of the league")]
    UnknownTeam(String),

    #[error("Team {0} can't play itself")]
    SelfMatch(String),

    #[error("Team {team} already has a game in period {period}")]
    DoubleBooked { team: String, period: usize },
}
