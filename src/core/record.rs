use super::game::Outcome;

/// A won-lost-tied record.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Record {
    pub fn new(wins: u32, losses: u32, ties: u32) -> Self {
        Self { wins, losses, ties }
    }

    pub fn add_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn add(&mut self, other: &Record) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Ties count as half a win. A record with no games is `0.0`.
    pub fn win_percentage(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            return 0.0;
        }
        (f64::from(self.wins) + f64::from(self.ties) / 2.0) / f64::from(played)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ties > 0 {
            write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            write!(f, "{}-{}", self.wins, self.losses)
        }
    }
}

/// Points scored and allowed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Points {
    pub scored: u32,
    pub allowed: u32,
}

impl Points {
    pub fn add(&mut self, scored: u16, allowed: u16) {
        self.scored += u32::from(scored);
        self.allowed += u32::from(allowed);
    }

    pub fn differential(&self) -> i64 {
        i64::from(self.scored) - i64::from(self.allowed)
    }
}
