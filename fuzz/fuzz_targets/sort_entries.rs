#![no_main]

extern crate arbitrary;
extern crate gridiron_standings;
extern crate libfuzzer_sys;
extern crate rand;

use rand::{SeedableRng, rngs::StdRng};

use gridiron_standings::core::{Game, League, LeagueSchedule};
use gridiron_standings::stats::create_entries;
use gridiron_standings::tiebreak::sort_entries;

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzGame {
    pub period: u8,
    pub home: u8,
    pub away: u8,
    pub home_score: u8,
    pub away_score: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct SortInput {
    pub games: Vec<FuzzGame>,
    /// Bit mask over the 32 teams picking the group to sort.
    pub group: u32,
    pub seed: u64,
}

fuzz_target!(|input: SortInput| {
    let league = League::nfl();
    let teams = league.teams();
    let num_periods = 18;

    let mut schedule = LeagueSchedule::new(num_periods);
    let mut booked = vec![[false; 32]; num_periods];
    for g in input.games.iter() {
        let period = g.period as usize % num_periods;
        let home = g.home as usize % teams.len();
        let away = g.away as usize % teams.len();
        if home == away || booked[period][home] || booked[period][away] {
            continue;
        }
        booked[period][home] = true;
        booked[period][away] = true;

        let mut game = Game::final_score(
            teams[home].name.as_str(),
            teams[away].name.as_str(),
            g.home_score as u16,
            g.away_score as u16,
        );
        game.completed = g.completed;
        schedule.add_game(period, game).unwrap();
    }

    let entries = create_entries(&league, &schedule).unwrap();
    let schedules = schedule.split_to_teams(&league).unwrap();
    let group: Vec<_> = entries
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| input.group & (1 << idx) != 0)
        .map(|(_, e)| e)
        .collect();

    let mut rng = StdRng::seed_from_u64(input.seed);
    let sorted = sort_entries(&group, &schedules, &mut rng).unwrap();

    let mut before: Vec<&str> = group.iter().map(|e| e.name()).collect();
    let mut after: Vec<&str> = sorted.iter().map(|e| e.name()).collect();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
});
