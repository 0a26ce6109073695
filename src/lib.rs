//! Football league standings with the complete multi-step tiebreaking
//! procedure.
//!
//! The crate is split into a few layers:
//!
//! - [`core`] holds the reference data (conferences, divisions, teams), the
//!   game and schedule model, and the per-team [`core::Entry`] that gets
//!   sorted.
//! - [`stats`] aggregates a [`core::LeagueSchedule`] into entries with
//!   records, points, streaks, strength of victory/schedule and point ranks.
//! - [`tiebreak`] is the recursive resolution engine. It classifies a tied
//!   group, walks the matching chain of criteria and isolates teams one at a
//!   time until every tie is broken.
//! - [`standings`] puts it all together into division and conference orders.
//!
//! # Example
//!
//! ```
//! use gridiron_standings::core::{Game, League, LeagueSchedule};
//! use gridiron_standings::stats::create_entries;
//! use gridiron_standings::tiebreak::sort_entries;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let league = League::nfl();
//! let mut schedule = LeagueSchedule::new(18);
//! schedule
//!     .add_game(0, Game::final_score("New England Patriots", "New York Jets", 24, 17))
//!     .unwrap();
//!
//! let entries = create_entries(&league, &schedule).unwrap();
//! let schedules = schedule.split_to_teams(&league).unwrap();
//!
//! let tied: Vec<_> = entries
//!     .into_iter()
//!     .filter(|e| e.name() == "New York Jets" || e.name() == "New England Patriots")
//!     .collect();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let sorted = sort_entries(&tied, &schedules, &mut rng).unwrap();
//! assert_eq!(sorted[0].name(), "New England Patriots");
//! ```

/// Reference data, games, schedules and entries.
pub mod core;

/// Aggregation of games into per-team stat sheets.
pub mod stats;

/// The tiebreak resolution engine and playoff seeding.
pub mod tiebreak;

/// Division and conference standings views.
pub mod standings;
