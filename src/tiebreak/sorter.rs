use rand::{Rng, rngs::StdRng};
use tracing::{debug, instrument, trace, warn};

use super::chain::{ChainKind, Chains, Strategy, classify};
use super::config::TiebreakConfig;
use super::criterion::Criterion;
use super::errors::{ConfigError, TiebreakError};
use super::group::{group_by_conference, group_by_division, group_entries};
use super::seeding::assign_seeds;
use crate::core::{Entry, Schedules, team_names};

/// Orders tied teams using the NFL tie-breaking procedures.
///
/// The sorter borrows every team's schedule and owns the random source used
/// for coin tosses. It can be reused for any number of groups.
///
/// ```
/// use gridiron_standings::core::{Game, League, LeagueSchedule};
/// use gridiron_standings::stats::create_entries;
/// use gridiron_standings::tiebreak::{TiebreakConfig, TiebreakSorter};
///
/// let league = League::nfl();
/// let mut schedule = LeagueSchedule::new(1);
/// schedule
///     .add_game(0, Game::final_score("Buffalo Bills", "Miami Dolphins", 3, 0))
///     .unwrap();
///
/// let entries = create_entries(&league, &schedule).unwrap();
/// let schedules = schedule.split_to_teams(&league).unwrap();
/// let config = TiebreakConfig {
///     seed: Some(1),
///     ..Default::default()
/// };
/// let mut sorter = TiebreakSorter::from_config(&schedules, config).unwrap();
///
/// let afc_east = &entries[0..4];
/// let sorted = sorter.sort_entries(afc_east).unwrap();
/// assert_eq!("Buffalo Bills", sorted[0].name());
/// ```
pub struct TiebreakSorter<'a, R: Rng> {
    chains: Chains,
    schedules: &'a Schedules,
    config: TiebreakConfig,
    rng: R,
}

impl<'a> TiebreakSorter<'a, StdRng> {
    /// Build a sorter whose coin toss comes from `config.seed`, or from the
    /// OS when no seed is set.
    pub fn from_config(
        schedules: &'a Schedules,
        config: TiebreakConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.rng();
        Ok(Self::new(schedules, rng).with_config(config))
    }
}

impl<'a, R: Rng> TiebreakSorter<'a, R> {
    pub fn new(schedules: &'a Schedules, rng: R) -> Self {
        Self {
            chains: Chains::nfl(),
            schedules,
            config: TiebreakConfig::default(),
            rng,
        }
    }

    pub fn with_config(mut self, config: TiebreakConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_chains(mut self, chains: Chains) -> Self {
        self.chains = chains;
        self
    }

    pub fn config(&self) -> &TiebreakConfig {
        &self.config
    }

    /// Return `entries` best first. The result is always a permutation of
    /// the input.
    #[instrument(level = "debug", skip_all, fields(teams = entries.len()))]
    pub fn sort_entries(&mut self, entries: &[Entry]) -> Result<Vec<Entry>, TiebreakError> {
        self.sort(entries.to_vec())
    }

    /// Sort a single conference's entries and assign playoff seeds.
    #[instrument(level = "debug", skip_all, fields(teams = entries.len()))]
    pub fn seed_entries(&mut self, entries: &[Entry]) -> Result<Vec<Entry>, TiebreakError> {
        let mixed = entries
            .windows(2)
            .any(|pair| pair[0].conference() != pair[1].conference());
        if mixed {
            return Err(TiebreakError::InvalidGroup(format!(
                "seeding needs a single conference, got [{}]",
                team_names(entries)
            )));
        }

        let mut sorted = self.sort_entries(entries)?;
        assign_seeds(&mut sorted, self.config.divisions_per_conference);
        Ok(sorted)
    }

    /// Classify the group and resolve it from the top of its chain.
    fn sort(&mut self, group: Vec<Entry>) -> Result<Vec<Entry>, TiebreakError> {
        if group.len() < 2 {
            return Ok(group);
        }
        let kind = classify(&group, self.config.max_divisions)?;
        self.resolve(group, kind, 0)
    }

    fn score(
        &mut self,
        criterion: Criterion,
        group: &[Entry],
    ) -> Result<Vec<f64>, TiebreakError> {
        criterion.scores(group, self.schedules, &self.config, &mut self.rng)
    }

    fn resolve(
        &mut self,
        group: Vec<Entry>,
        kind: ChainKind,
        step: usize,
    ) -> Result<Vec<Entry>, TiebreakError> {
        if group.len() < 2 {
            return Ok(group);
        }
        let Some(descriptor) = self.chains.get(kind).get(step).copied() else {
            warn!(
                chain = %kind,
                teams = %team_names(&group),
                "Ran out of tiebreakers, keeping current order"
            );
            return Ok(group);
        };
        debug!(
            chain = %kind,
            criterion = descriptor.name,
            teams = %team_names(&group),
            "Breaking tie"
        );

        match descriptor.strategy {
            Strategy::Subgroup => {
                let scores = self.score(descriptor.criterion, &group)?;
                let mut sorted = Vec::with_capacity(group.len());
                for subgroup in group_entries(&group, &scores) {
                    if subgroup.len() == 1 {
                        sorted.extend(subgroup);
                    } else {
                        // Same chain, no reclassification.
                        sorted.extend(self.resolve(subgroup, kind, step + 1)?);
                    }
                }
                Ok(sorted)
            }
            Strategy::Elimination => {
                let scores = self.score(descriptor.criterion, &group)?;
                let mut groups = group_entries(&group, &scores);

                if groups[0].len() == 1 {
                    let best = groups.remove(0);
                    trace!(team = best[0].name(), "Isolated best");
                    return self.lock_first(best, groups.concat());
                }

                if groups.last().is_some_and(|g| g.len() == 1) {
                    let worst = groups.pop().unwrap_or_default();
                    trace!(team = worst[0].name(), "Isolated worst");
                    let mut sorted = self.sort(groups.concat())?;
                    sorted.extend(worst);
                    return Ok(sorted);
                }

                if groups[0].len() == group.len() {
                    return self.resolve(group, kind, step + 1);
                }

                let top = groups.remove(0);
                self.lead_from(top, groups.concat())
            }
            Strategy::DoubleElimination => {
                let mut survivors = Vec::new();
                let mut discards = Vec::new();
                for division in group_by_division(&group) {
                    if division.len() == 1 {
                        survivors.extend(division);
                        continue;
                    }
                    let mut sorted = self.sort(division)?.into_iter();
                    survivors.extend(sorted.next());
                    discards.extend(sorted);
                }
                trace!(
                    survivors = %team_names(&survivors),
                    discards = %team_names(&discards),
                    "Reduced to division leaders"
                );

                let scores = self.score(descriptor.criterion, &survivors)?;
                let mut groups = group_entries(&survivors, &scores);

                if groups[0].len() == 1 {
                    let best = groups.remove(0);
                    trace!(team = best[0].name(), "Isolated best");
                    let mut rest = groups.concat();
                    rest.extend(discards);
                    return self.lock_first(best, rest);
                }

                // A discarded team may be worse than the worst survivor, so
                // only isolate the worst when nobody was discarded.
                if discards.is_empty() && groups.last().is_some_and(|g| g.len() == 1) {
                    let worst = groups.pop().unwrap_or_default();
                    trace!(team = worst[0].name(), "Isolated worst");
                    let mut sorted = self.sort(groups.concat())?;
                    sorted.extend(worst);
                    return Ok(sorted);
                }

                let top = groups.remove(0);
                if top.len() == group.len() {
                    return self.resolve(top, kind, step + 1);
                }

                let mut rest = groups.concat();
                rest.extend(discards);
                self.lead_from(top, rest)
            }
            Strategy::TripleElimination => {
                let mut leftovers = Vec::new();

                let mut division_worst = Vec::new();
                for division in group_by_division(&group) {
                    self.split_worst(division, &mut division_worst, &mut leftovers)?;
                }

                let mut conference_worst = Vec::new();
                for conference in group_by_conference(&division_worst) {
                    self.split_worst(conference, &mut conference_worst, &mut leftovers)?;
                }

                let mut league_worst = Vec::new();
                self.split_worst(conference_worst, &mut league_worst, &mut leftovers)?;
                trace!(team = %team_names(&league_worst), "Isolated worst in league");

                let mut sorted = self.sort(leftovers)?;
                sorted.extend(league_worst);
                Ok(sorted)
            }
        }
    }

    /// `best` keeps the first spot and `rest` is sorted from scratch.
    fn lock_first(
        &mut self,
        best: Vec<Entry>,
        rest: Vec<Entry>,
    ) -> Result<Vec<Entry>, TiebreakError> {
        let mut sorted = best;
        sorted.extend(self.sort(rest)?);
        Ok(sorted)
    }

    /// Sort the tied `top` on its own to find a leader, then sort everyone
    /// else (the rest of `top` plus `rest`) from scratch behind it.
    fn lead_from(
        &mut self,
        top: Vec<Entry>,
        rest: Vec<Entry>,
    ) -> Result<Vec<Entry>, TiebreakError> {
        let mut top_sorted = self.sort(top)?.into_iter();
        let leader: Vec<Entry> = top_sorted.next().into_iter().collect();
        let mut others: Vec<Entry> = top_sorted.collect();
        others.extend(rest);
        self.lock_first(leader, others)
    }

    /// Sort `group`, push its last team onto `worst` and everyone else onto
    /// `leftovers`.
    fn split_worst(
        &mut self,
        group: Vec<Entry>,
        worst: &mut Vec<Entry>,
        leftovers: &mut Vec<Entry>,
    ) -> Result<(), TiebreakError> {
        let mut sorted = self.sort(group)?;
        worst.extend(sorted.pop());
        leftovers.extend(sorted);
        Ok(())
    }
}
