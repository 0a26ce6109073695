//! Recursive tie resolution.
//!
//! A tied group is classified into a [`ChainKind`] by how many clubs,
//! conferences and divisions it spans. The chain is walked one
//! [`CriterionDescriptor`] at a time; each step scores the current group and
//! applies its [`Strategy`] to lock in teams or hand the rest to the next
//! step. Whenever a team is locked in the remaining teams start over from
//! the top, since head to head and common games change with the group.
mod chain;
mod config;
mod criterion;
mod errors;
mod group;
mod seeding;
mod sorter;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use chain::{Chain, ChainKind, Chains, CriterionDescriptor, Strategy, classify};
pub use config::TiebreakConfig;
pub use criterion::{Criterion, NOT_ENOUGH_COMMON_GAMES, common_opponents};
pub use errors::{ConfigError, TiebreakError};
pub use group::{group_by_conference, group_by_division, group_entries};
pub use seeding::assign_seeds;
pub use sorter::TiebreakSorter;

use rand::Rng;

use crate::core::{Entry, Schedules};

/// Sort `entries` best first with the default configuration.
pub fn sort_entries<R: Rng + ?Sized>(
    entries: &[Entry],
    schedules: &Schedules,
    rng: &mut R,
) -> Result<Vec<Entry>, TiebreakError> {
    TiebreakSorter::new(schedules, rng).sort_entries(entries)
}

/// Sort one conference's entries and fill in their playoff seeds.
pub fn seed_entries<R: Rng + ?Sized>(
    entries: &[Entry],
    schedules: &Schedules,
    rng: &mut R,
) -> Result<Vec<Entry>, TiebreakError> {
    TiebreakSorter::new(schedules, rng).seed_entries(entries)
}
