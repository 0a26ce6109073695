use std::collections::HashMap;
use std::fmt;

use super::errors::LeagueError;

/// One of the two leaguewide conferences.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Conference {
    Afc,
    Nfc,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Afc, Conference::Nfc];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::Afc => write!(f, "American Football Conference"),
            Conference::Nfc => write!(f, "National Football Conference"),
        }
    }
}

/// The geographic part of a division name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Region {
    East,
    North,
    South,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::East, Region::North, Region::South, Region::West];
}

/// A division is always owned by exactly one conference, so two divisions
/// are equal only when both the conference and the region match.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Division {
    pub conference: Conference,
    pub region: Region,
}

impl Division {
    pub const fn new(conference: Conference, region: Region) -> Self {
        Self { conference, region }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.conference.abbreviation(), self.region)
    }
}

/// Immutable reference data for one club.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct TeamIdentity {
    pub name: String,
    pub division: Division,
}

impl TeamIdentity {
    pub fn new(name: impl Into<String>, conference: Conference, region: Region) -> Self {
        Self {
            name: name.into(),
            division: Division::new(conference, region),
        }
    }

    pub fn conference(&self) -> Conference {
        self.division.conference
    }

    pub fn same_division(&self, other: &TeamIdentity) -> bool {
        self.division == other.division
    }

    pub fn same_conference(&self, other: &TeamIdentity) -> bool {
        self.conference() == other.conference()
    }
}

/// Lookup table of every team in the league.
///
/// The table is built once and passed by reference to whatever needs to
/// resolve a team name into its conference and division.
#[derive(Debug, Clone)]
pub struct League {
    teams: Vec<TeamIdentity>,
    by_name: HashMap<String, usize>,
}

impl League {
    /// Build a league from a list of identities. Names must be unique.
    pub fn new(teams: Vec<TeamIdentity>) -> Result<Self, LeagueError> {
        let mut by_name = HashMap::with_capacity(teams.len());
        for (idx, team) in teams.iter().enumerate() {
            if by_name.insert(team.name.clone(), idx).is_some() {
                return Err(LeagueError::DuplicateTeam(team.name.clone()));
            }
        }
        Ok(Self { teams, by_name })
    }

    /// The standard 32 club, two conference, eight division layout.
    pub fn nfl() -> Self {
        use Conference::{Afc, Nfc};
        use Region::{East, North, South, West};

        let layout: [(&str, Conference, Region); 32] = [
            ("Buffalo Bills", Afc, East),
            ("Miami Dolphins", Afc, East),
            ("New England Patriots", Afc, East),
            ("New York Jets", Afc, East),
            ("Baltimore Ravens", Afc, North),
            ("Cincinnati Bengals", Afc, North),
            ("Cleveland Browns", Afc, North),
            ("Pittsburgh Steelers", Afc, North),
            ("Houston Texans", Afc, South),
            ("Indianapolis Colts", Afc, South),
            ("Jacksonville Jaguars", Afc, South),
            ("Tennessee Titans", Afc, South),
            ("Denver Broncos", Afc, West),
            ("Kansas City Chiefs", Afc, West),
            ("Las Vegas Raiders", Afc, West),
            ("Los Angeles Chargers", Afc, West),
            ("Dallas Cowboys", Nfc, East),
            ("New York Giants", Nfc, East),
            ("Philadelphia Eagles", Nfc, East),
            ("Washington Commanders", Nfc, East),
            ("Chicago Bears", Nfc, North),
            ("Detroit Lions", Nfc, North),
            ("Green Bay Packers", Nfc, North),
            ("Minnesota Vikings", Nfc, North),
            ("Atlanta Falcons", Nfc, South),
            ("Carolina Panthers", Nfc, South),
            ("New Orleans Saints", Nfc, South),
            ("Tampa Bay Buccaneers", Nfc, South),
            ("Arizona Cardinals", Nfc, West),
            ("Los Angeles Rams", Nfc, West),
            ("San Francisco 49ers", Nfc, West),
            ("Seattle Seahawks", Nfc, West),
        ];

        let teams = layout
            .iter()
            .map(|(name, conference, region)| TeamIdentity::new(*name, *conference, *region))
            .collect();

        // The layout above is a constant with unique names.
        Self::new(teams).unwrap_or_else(|e| unreachable!("static league table is invalid: {e}"))
    }

    pub fn team(&self, name: &str) -> Option<&TeamIdentity> {
        self.by_name.get(name).map(|idx| &self.teams[*idx])
    }

    pub fn teams(&self) -> &[TeamIdentity] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Every distinct division in the league, in table order.
    pub fn divisions(&self) -> Vec<Division> {
        let mut out: Vec<Division> = Vec::new();
        for team in &self.teams {
            if !out.contains(&team.division) {
                out.push(team.division);
            }
        }
        out
    }

    pub fn divisions_in(&self, conference: Conference) -> usize {
        self.divisions()
            .iter()
            .filter(|d| d.conference == conference)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfl_layout() {
        let league = League::nfl();
        assert_eq!(32, league.len());
        assert_eq!(8, league.divisions().len());
        assert_eq!(4, league.divisions_in(Conference::Afc));
        assert_eq!(4, league.divisions_in(Conference::Nfc));

        for division in league.divisions() {
            let count = league
                .teams()
                .iter()
                .filter(|t| t.division == division)
                .count();
            assert_eq!(4, count, "{division} should have four teams");
        }
    }

    #[test]
    fn test_lookup() {
        let league = League::nfl();
        let jets = league.team("New York Jets").unwrap();
        let giants = league.team("New York Giants").unwrap();
        let pats = league.team("New England Patriots").unwrap();

        assert_eq!(Conference::Afc, jets.conference());
        assert!(jets.same_division(pats));
        assert!(!jets.same_conference(giants));
        assert!(league.team("London Monarchs").is_none());
    }

    #[test]
    fn test_duplicate_team_rejected() {
        let teams = vec![
            TeamIdentity::new("A", Conference::Afc, Region::East),
            TeamIdentity::new("A", Conference::Nfc, Region::West),
        ];
        assert_eq!(
            LeagueError::DuplicateTeam("A".to_string()),
            League::new(teams).unwrap_err()
        );
    }

    #[test]
    fn test_division_display() {
        let division = Division::new(Conference::Nfc, Region::North);
        assert_eq!("NFC North", division.to_string());
    }
}
