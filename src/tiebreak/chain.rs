use std::collections::BTreeSet;
use std::fmt;

use super::criterion::Criterion;
use super::errors::TiebreakError;
use crate::core::{Entry, team_names};

/// How a criterion's scores are turned into an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Split into runs of equal score and resolve each run on its own with
    /// the next criterion. Only valid at the root of a chain.
    Subgroup,
    /// Lock in a sole best or sole worst team and start over with the rest.
    Elimination,
    /// Reduce every division to its best team first, then eliminate among
    /// the survivors.
    DoubleElimination,
    /// Find the worst team in each division, then in each conference, then
    /// in the league.
    TripleElimination,
}

/// One step of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionDescriptor {
    pub name: &'static str,
    pub criterion: Criterion,
    pub strategy: Strategy,
}

impl CriterionDescriptor {
    pub const fn new(name: &'static str, criterion: Criterion, strategy: Strategy) -> Self {
        Self {
            name,
            criterion,
            strategy,
        }
    }

    fn of(criterion: Criterion, strategy: Strategy) -> Self {
        Self::new(criterion.name(), criterion, strategy)
    }
}

/// The situation a tied group is in. Each kind has its own ordered list of
/// tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
    Division2,
    Division3,
    Conference2,
    Conference3,
    League2,
    League3,
}

impl ChainKind {
    pub const ALL: [ChainKind; 6] = [
        ChainKind::Division2,
        ChainKind::Division3,
        ChainKind::Conference2,
        ChainKind::Conference3,
        ChainKind::League2,
        ChainKind::League3,
    ];
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChainKind::Division2 => "Division 2 Clubs",
            ChainKind::Division3 => "Division 3+ Clubs",
            ChainKind::Conference2 => "Conference 2 Clubs",
            ChainKind::Conference3 => "Conference 3+ Clubs",
            ChainKind::League2 => "League 2 Clubs",
            ChainKind::League3 => "League 3+ Clubs",
        };
        write!(f, "{name}")
    }
}

/// An ordered list of tiebreak steps. Index 0 is always win percentage
/// with [`Strategy::Subgroup`] and the last step is always a coin toss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub kind: ChainKind,
    criteria: Vec<CriterionDescriptor>,
}

impl Chain {
    /// Build a chain.
    ///
    /// # Panics
    ///
    /// When the steps don't start with a win percentage subgroup, don't end
    /// with a coin toss, or use [`Strategy::Subgroup`] anywhere but the root.
    pub fn new(kind: ChainKind, criteria: Vec<CriterionDescriptor>) -> Self {
        let root = criteria.first();
        assert!(
            matches!(
                root,
                Some(CriterionDescriptor {
                    criterion: Criterion::WinPercentage,
                    strategy: Strategy::Subgroup,
                    ..
                })
            ),
            "{kind} chain must start with a win percentage subgroup"
        );
        assert!(
            matches!(
                criteria.last(),
                Some(CriterionDescriptor {
                    criterion: Criterion::CoinToss,
                    ..
                })
            ),
            "{kind} chain must end with a coin toss"
        );
        assert!(
            criteria[1..]
                .iter()
                .all(|c| c.strategy != Strategy::Subgroup),
            "{kind} chain can only use subgroups at the root"
        );
        Self { kind, criteria }
    }

    pub fn get(&self, step: usize) -> Option<&CriterionDescriptor> {
        self.criteria.get(step)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn criteria(&self) -> &[CriterionDescriptor] {
        &self.criteria
    }
}

/// The full set of chains, one per [`ChainKind`].
#[derive(Debug, Clone)]
pub struct Chains {
    chains: Vec<Chain>,
}

impl Chains {
    /// Collect one chain per [`ChainKind`], in any order.
    ///
    /// # Panics
    ///
    /// When a kind has no chain or more than one.
    pub fn new(chains: Vec<Chain>) -> Self {
        let mut ordered = Vec::with_capacity(ChainKind::ALL.len());
        for kind in ChainKind::ALL {
            let mut matching = chains.iter().filter(|c| c.kind == kind);
            let Some(chain) = matching.next() else {
                panic!("no chain for {kind}");
            };
            assert!(matching.next().is_none(), "more than one chain for {kind}");
            ordered.push(chain.clone());
        }
        Self { chains: ordered }
    }

    /// NFL tie-breaking procedures.
    pub fn nfl() -> Self {
        use Criterion::*;
        use Strategy::*;

        let root = CriterionDescriptor::of(WinPercentage, Subgroup);

        let division = |kind: ChainKind| {
            let mut steps = vec![root];
            steps.extend(
                [
                    HeadToHead,
                    DivisionRecord,
                    CommonGames,
                    ConferenceRecord,
                    StrengthOfVictory,
                    StrengthOfSchedule,
                    CombinedRankConference,
                    CombinedRankLeague,
                    NetPointsCommonGames,
                    NetPoints,
                    CoinToss,
                ]
                .into_iter()
                .map(|c| CriterionDescriptor::of(c, Elimination)),
            );
            Chain::new(kind, steps)
        };

        let conference = |kind: ChainKind, first: Criterion, strategy: Strategy| {
            let mut steps = vec![root];
            steps.extend(
                [
                    first,
                    ConferenceRecord,
                    CommonGamesMinimum,
                    StrengthOfVictory,
                    StrengthOfSchedule,
                    CombinedRankConference,
                    CombinedRankLeague,
                    NetPointsConference,
                    NetPoints,
                    CoinToss,
                ]
                .into_iter()
                .map(|c| CriterionDescriptor::of(c, strategy)),
            );
            Chain::new(kind, steps)
        };

        let mut league2 = vec![root];
        league2.extend(
            [
                HeadToHead,
                CommonGamesMinimum,
                StrengthOfVictory,
                CombinedRankLeague,
                NetPoints,
                CoinToss,
            ]
            .into_iter()
            .map(|c| CriterionDescriptor::of(c, Elimination)),
        );

        let league3 = vec![
            root,
            CriterionDescriptor::new(
                "Division, Conference, then League Elimination",
                WinPercentage,
                TripleElimination,
            ),
            CriterionDescriptor::of(CoinToss, Elimination),
        ];

        Self::new(vec![
            division(ChainKind::Division2),
            division(ChainKind::Division3),
            conference(ChainKind::Conference2, HeadToHead, Elimination),
            conference(ChainKind::Conference3, HeadToHeadSweep, DoubleElimination),
            Chain::new(ChainKind::League2, league2),
            Chain::new(ChainKind::League3, league3),
        ])
    }

    pub fn get(&self, kind: ChainKind) -> &Chain {
        // Built in ChainKind::ALL order.
        &self.chains[kind as usize]
    }
}

impl Default for Chains {
    fn default() -> Self {
        Self::nfl()
    }
}

/// Pick the chain for a tied group from how many clubs, conferences and
/// divisions it spans.
pub fn classify(group: &[Entry], max_divisions: usize) -> Result<ChainKind, TiebreakError> {
    if group.len() < 2 {
        return Err(TiebreakError::InvalidGroup(format!(
            "need at least two teams, got [{}]",
            team_names(group)
        )));
    }

    let conferences: BTreeSet<_> = group.iter().map(Entry::conference).collect();
    let divisions: BTreeSet<_> = group.iter().map(Entry::division).collect();

    if conferences.len() > 2 || divisions.len() > max_divisions {
        return Err(TiebreakError::InvalidGroup(format!(
            "{} conferences and {} divisions in [{}]",
            conferences.len(),
            divisions.len(),
            team_names(group)
        )));
    }

    let two_clubs = group.len() == 2;
    let kind = match (conferences.len(), divisions.len()) {
        (2, _) if two_clubs => ChainKind::League2,
        (2, _) => ChainKind::League3,
        (_, d) if d >= 2 && two_clubs => ChainKind::Conference2,
        (_, d) if d >= 2 => ChainKind::Conference3,
        _ if two_clubs => ChainKind::Division2,
        _ => ChainKind::Division3,
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Conference, Region, TeamIdentity};

    fn entry(name: &str, conference: Conference, region: Region) -> Entry {
        Entry::new(TeamIdentity::new(name, conference, region))
    }

    #[test]
    fn test_classify() {
        let a = entry("A", Conference::Afc, Region::East);
        let b = entry("B", Conference::Afc, Region::East);
        let c = entry("C", Conference::Afc, Region::North);
        let d = entry("D", Conference::Nfc, Region::North);

        let cases = [
            (vec![a.clone(), b.clone()], ChainKind::Division2),
            (vec![a.clone(), b.clone(), b.clone()], ChainKind::Division3),
            (vec![a.clone(), c.clone()], ChainKind::Conference2),
            (vec![a.clone(), b.clone(), c.clone()], ChainKind::Conference3),
            (vec![a.clone(), d.clone()], ChainKind::League2),
            (vec![a.clone(), c.clone(), d.clone()], ChainKind::League3),
        ];
        for (group, expected) in cases {
            assert_eq!(expected, classify(&group, 8).unwrap(), "{}", team_names(&group));
        }
    }

    #[test]
    fn test_classify_rejects_small_groups() {
        let a = entry("A", Conference::Afc, Region::East);
        assert!(matches!(classify(&[a], 8), Err(TiebreakError::InvalidGroup(_))));
        assert!(matches!(classify(&[], 8), Err(TiebreakError::InvalidGroup(_))));
    }

    #[test]
    fn test_classify_rejects_too_many_divisions() {
        let group = vec![
            entry("A", Conference::Afc, Region::East),
            entry("B", Conference::Afc, Region::North),
            entry("C", Conference::Afc, Region::South),
        ];
        assert!(classify(&group, 3).is_ok());
        assert!(matches!(classify(&group, 2), Err(TiebreakError::InvalidGroup(_))));
    }

    #[test]
    fn test_chains_line_up_with_kinds() {
        let chains = Chains::nfl();
        for kind in ChainKind::ALL {
            assert_eq!(kind, chains.get(kind).kind);
        }
        assert_eq!(12, chains.get(ChainKind::Division2).len());
        assert_eq!(11, chains.get(ChainKind::Conference2).len());
        assert_eq!(7, chains.get(ChainKind::League2).len());
        assert_eq!(3, chains.get(ChainKind::League3).len());
    }

    #[test]
    fn test_conference_three_uses_sweep_and_double_elimination() {
        let chains = Chains::nfl();
        let chain = chains.get(ChainKind::Conference3);
        assert_eq!(Criterion::HeadToHeadSweep, chain.get(1).unwrap().criterion);
        assert!(chain.criteria()[1..]
            .iter()
            .all(|c| c.strategy == Strategy::DoubleElimination));
    }

    #[test]
    fn test_division_combined_ranks_are_distinct() {
        let chains = Chains::nfl();
        let chain = chains.get(ChainKind::Division2);
        assert_eq!(Criterion::CombinedRankConference, chain.get(7).unwrap().criterion);
        assert_eq!(Criterion::CombinedRankLeague, chain.get(8).unwrap().criterion);
    }

    #[test]
    #[should_panic(expected = "must end with a coin toss")]
    fn test_chain_without_coin_toss() {
        Chain::new(
            ChainKind::Division2,
            vec![
                CriterionDescriptor::of(Criterion::WinPercentage, Strategy::Subgroup),
                CriterionDescriptor::of(Criterion::NetPoints, Strategy::Elimination),
            ],
        );
    }

    #[test]
    #[should_panic(expected = "only use subgroups at the root")]
    fn test_chain_with_inner_subgroup() {
        Chain::new(
            ChainKind::Division2,
            vec![
                CriterionDescriptor::of(Criterion::WinPercentage, Strategy::Subgroup),
                CriterionDescriptor::of(Criterion::NetPoints, Strategy::Subgroup),
                CriterionDescriptor::of(Criterion::CoinToss, Strategy::Elimination),
            ],
        );
    }

    fn short_chain(kind: ChainKind) -> Chain {
        Chain::new(
            kind,
            vec![
                CriterionDescriptor::of(Criterion::WinPercentage, Strategy::Subgroup),
                CriterionDescriptor::of(Criterion::CoinToss, Strategy::Elimination),
            ],
        )
    }

    #[test]
    fn test_chains_new_orders_by_kind() {
        let mut chains: Vec<Chain> = ChainKind::ALL.into_iter().map(short_chain).collect();
        chains.reverse();
        let chains = Chains::new(chains);
        for kind in ChainKind::ALL {
            assert_eq!(kind, chains.get(kind).kind);
            assert_eq!(2, chains.get(kind).len());
        }
    }

    #[test]
    #[should_panic(expected = "no chain for League 3+ Clubs")]
    fn test_chains_new_missing_kind() {
        let chains = ChainKind::ALL[..5].iter().copied().map(short_chain).collect();
        Chains::new(chains);
    }

    #[test]
    #[should_panic(expected = "more than one chain for Division 2 Clubs")]
    fn test_chains_new_duplicate_kind() {
        let mut chains: Vec<Chain> = ChainKind::ALL.into_iter().map(short_chain).collect();
        chains.push(short_chain(ChainKind::Division2));
        Chains::new(chains);
    }

    #[test]
    #[should_panic(expected = "must start with a win percentage subgroup")]
    fn test_chain_without_root() {
        Chain::new(
            ChainKind::League2,
            vec![CriterionDescriptor::of(Criterion::CoinToss, Strategy::Elimination)],
        );
    }
}
