use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridiron_standings::core::{Conference, Game, League, LeagueSchedule};
use gridiron_standings::stats::create_entries;
use gridiron_standings::tiebreak::TiebreakSorter;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// A season of random results where every team plays once per period.
fn random_season(league: &League, periods: usize, seed: u64) -> LeagueSchedule {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut schedule = LeagueSchedule::new(periods);
    let names: Vec<&str> = league.teams().iter().map(|t| t.name.as_str()).collect();

    for period in 0..periods {
        let mut order = names.clone();
        order.shuffle(&mut rng);
        for pair in order.chunks_exact(2) {
            // Low scores so ties on record are common.
            let home: u16 = rng.random_range(0..4) * 7;
            let away: u16 = rng.random_range(0..4) * 7;
            schedule
                .add_game(period, Game::final_score(pair[0], pair[1], home, away))
                .unwrap();
        }
    }
    schedule
}

fn bench_sort_conference(c: &mut Criterion) {
    let league = League::nfl();
    let mut group = c.benchmark_group("sort_conference");

    for periods in [0, 4, 17] {
        let schedule = random_season(&league, periods, 42);
        let entries = create_entries(&league, &schedule).unwrap();
        let schedules = schedule.split_to_teams(&league).unwrap();
        let afc: Vec<_> = entries
            .into_iter()
            .filter(|e| e.conference() == Conference::Afc)
            .collect();

        group.bench_with_input(BenchmarkId::new("periods", periods), &afc, |b, afc| {
            let mut sorter = TiebreakSorter::new(&schedules, StdRng::seed_from_u64(7));
            b.iter(|| sorter.seed_entries(afc).unwrap());
        });
    }

    group.finish();
}

fn bench_create_entries(c: &mut Criterion) {
    let league = League::nfl();
    let schedule = random_season(&league, 17, 42);
    c.bench_function("create_entries", |b| {
        b.iter(|| create_entries(&league, &schedule).unwrap())
    });
}

criterion_group!(benches, bench_sort_conference, bench_create_entries);
criterion_main!(benches);
