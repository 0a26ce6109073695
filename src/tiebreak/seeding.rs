use std::collections::HashSet;

use tracing::trace;

use crate::core::{Division, Entry};

/// Give every entry of a sorted conference its playoff seed.
///
/// The best team of each division takes the next division winner seed,
/// starting at 1. Everyone else takes the next wildcard seed, starting at
/// `divisions_per_conference + 1`. Division winners past
/// `divisions_per_conference` are seeded as wildcards.
pub fn assign_seeds(sorted: &mut [Entry], divisions_per_conference: u8) {
    let mut seen: HashSet<Division> = HashSet::new();
    let mut division_seed: u8 = 1;
    let mut wildcard_seed: u8 = divisions_per_conference.saturating_add(1);

    for entry in sorted.iter_mut() {
        let winner = division_seed <= divisions_per_conference && seen.insert(entry.division());
        let seed = if winner {
            let seed = division_seed;
            division_seed += 1;
            seed
        } else {
            let seed = wildcard_seed;
            wildcard_seed = wildcard_seed.saturating_add(1);
            seed
        };
        trace!(team = entry.name(), seed, winner, "Seeded");
        entry.stats.seed = Some(seed);
    }
}
