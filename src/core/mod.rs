//! Reference data and the game model everything else is built on.
mod entry;
mod errors;
mod game;
mod record;
mod schedule;
mod team;

pub use entry::{Entry, StatSheet, filter_entries, team_names};
pub use errors::{LeagueError, ScheduleError};
pub use game::{Game, Outcome};
pub use record::{Points, Record};
pub use schedule::{LeagueSchedule, Schedules, TeamSchedule};
pub use team::{Conference, Division, League, Region, TeamIdentity};
