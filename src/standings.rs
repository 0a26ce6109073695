use rand::Rng;
use tracing::{debug, instrument};

use crate::core::{Conference, Division, Entry, League, LeagueSchedule, Schedules};
use crate::stats::create_entries;
use crate::tiebreak::{ConfigError, TiebreakConfig, TiebreakError, TiebreakSorter};

/// Errors building standings.
#[derive(thiserror::Error, Debug)]
pub enum StandingsError {
    #[error(transparent)]
    Schedule(#[from] crate::core::ScheduleError),

    #[error(transparent)]
    Tiebreak(#[from] TiebreakError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Fully resolved standings for one snapshot of a season.
#[derive(Debug, Clone)]
pub struct Standings {
    entries: Vec<Entry>,
    schedules: Schedules,
    conferences: Vec<(Conference, Vec<Entry>)>,
    divisions: Vec<(Division, Vec<Entry>)>,
}

impl Standings {
    /// Aggregate `schedule`, then sort every division and seed every
    /// conference.
    ///
    /// `rng` drives any coin tosses and takes precedence over `config.seed`,
    /// which is ignored here. Use [`Standings::compute_with_config`] to toss
    /// with the configured seed.
    #[instrument(level = "debug", skip_all, fields(teams = league.len()))]
    pub fn compute<R: Rng>(
        league: &League,
        schedule: &LeagueSchedule,
        rng: R,
        config: TiebreakConfig,
    ) -> Result<Self, StandingsError> {
        let entries = create_entries(league, schedule)?;
        let schedules = schedule.split_to_teams(league)?;

        let mut sorter = TiebreakSorter::new(&schedules, rng).with_config(config);

        let mut divisions = Vec::new();
        for division in league.divisions() {
            let members: Vec<Entry> = entries
                .iter()
                .filter(|e| e.division() == division)
                .cloned()
                .collect();
            let sorted = sorter.sort_entries(&members)?;
            divisions.push((division, sorted));
        }

        let mut conferences = Vec::new();
        for conference in Conference::ALL {
            let members: Vec<Entry> = entries
                .iter()
                .filter(|e| e.conference() == conference)
                .cloned()
                .collect();
            if members.is_empty() {
                continue;
            }
            let mut seeded = sorter.seed_entries(&members)?;
            seeded.sort_by_key(|e| e.stats.seed);
            conferences.push((conference, seeded));
        }

        // Carry seeds back onto the flat list.
        let mut entries = entries;
        for entry in entries.iter_mut() {
            entry.stats.seed = conferences
                .iter()
                .flat_map(|(_, seeded)| seeded.iter())
                .find(|e| e.name() == entry.name())
                .and_then(|e| e.stats.seed);
        }

        debug!(
            divisions = divisions.len(),
            conferences = conferences.len(),
            "Computed standings"
        );
        Ok(Self {
            entries,
            schedules,
            conferences,
            divisions,
        })
    }

    /// Like [`Standings::compute`] with the coin toss seeded from
    /// `config.seed`, or from the OS when it's unset. The config is
    /// validated first.
    pub fn compute_with_config(
        league: &League,
        schedule: &LeagueSchedule,
        config: TiebreakConfig,
    ) -> Result<Self, StandingsError> {
        config.validate()?;
        let rng = config.rng();
        Self::compute(league, schedule, rng, config)
    }

    /// A conference in seed order.
    pub fn conference(&self, conference: Conference) -> &[Entry] {
        self.conferences
            .iter()
            .find(|(c, _)| *c == conference)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    /// A division best first.
    pub fn division(&self, division: Division) -> &[Entry] {
        self.divisions
            .iter()
            .find(|(d, _)| *d == division)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Every team in league table order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn schedules(&self) -> &Schedules {
        &self.schedules
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Game, Region, ScheduleError};

    fn compute(schedule: &LeagueSchedule) -> Result<Standings, StandingsError> {
        Standings::compute(
            &League::nfl(),
            schedule,
            StdRng::seed_from_u64(21),
            TiebreakConfig::default(),
        )
    }

    #[test_log::test]
    fn test_preseason_standings_are_complete() {
        let standings = compute(&LeagueSchedule::new(0)).unwrap();
        assert_eq!(32, standings.entries().len());

        for conference in Conference::ALL {
            let seeded = standings.conference(conference);
            assert_eq!(16, seeded.len());
            let seeds: Vec<Option<u8>> = seeded.iter().map(|e| e.stats.seed).collect();
            let expected: Vec<Option<u8>> = (1..=16).map(Some).collect();
            assert_eq!(expected, seeds);

            let winners: HashSet<Division> =
                seeded.iter().take(4).map(Entry::division).collect();
            assert_eq!(4, winners.len());
        }

        for division in League::nfl().divisions() {
            assert_eq!(4, standings.division(division).len());
        }
    }

    #[test_log::test]
    fn test_division_leader_gets_top_seed() {
        let mut schedule = LeagueSchedule::new(1);
        schedule
            .add_game(0, Game::final_score("Buffalo Bills", "Miami Dolphins", 21, 3))
            .unwrap();
        let standings = compute(&schedule).unwrap();

        let afc_east = standings.division(Division::new(Conference::Afc, Region::East));
        assert_eq!("Buffalo Bills", afc_east[0].name());

        assert_eq!(
            Some(1),
            standings.entry("Buffalo Bills").and_then(|e| e.stats.seed)
        );
        assert_eq!("Buffalo Bills", standings.conference(Conference::Afc)[0].name());
        assert!(standings.entry("Frankfurt Galaxy").is_none());
    }

    #[test]
    fn test_unknown_team() {
        let mut schedule = LeagueSchedule::new(1);
        schedule
            .add_game(0, Game::final_score("Buffalo Bills", "Rhein Fire", 21, 3))
            .unwrap();
        assert!(matches!(
            compute(&schedule),
            Err(StandingsError::Schedule(ScheduleError::UnknownTeam(name))) if name == "Rhein Fire"
        ));
    }

    #[test_log::test]
    fn test_compute_with_config_uses_seed() {
        let config = TiebreakConfig {
            seed: Some(17),
            ..Default::default()
        };
        let league = League::nfl();
        let schedule = LeagueSchedule::new(0);

        // Preseason order is all coin tosses, so the seed decides it.
        let first = Standings::compute_with_config(&league, &schedule, config.clone()).unwrap();
        let again = Standings::compute_with_config(&league, &schedule, config.clone()).unwrap();
        assert_eq!(first.entries(), again.entries());

        let explicit =
            Standings::compute(&league, &schedule, StdRng::seed_from_u64(17), config).unwrap();
        assert_eq!(first.entries(), explicit.entries());
    }

    #[test]
    fn test_compute_with_config_rejects_invalid() {
        let config = TiebreakConfig {
            divisions_per_conference: 0,
            ..Default::default()
        };
        assert!(matches!(
            Standings::compute_with_config(&League::nfl(), &LeagueSchedule::new(0), config),
            Err(StandingsError::Config(ConfigError::Validation(_)))
        ));
    }
}
