/// How a completed game ended from one team's point of view.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

/// A single game between two clubs.
///
/// Games that are not `completed` are scheduled but unplayed, they never
/// count toward records, points, or opponent lookups.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Game {
    pub home: String,
    pub away: String,
    pub home_score: u16,
    pub away_score: u16,
    pub completed: bool,
}

impl Game {
    /// A completed game with its final score.
    pub fn final_score(
        home: impl Into<String>,
        away: impl Into<String>,
        home_score: u16,
        away_score: u16,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_score,
            away_score,
            completed: true,
        }
    }

    /// A game that hasn't been played yet.
    pub fn scheduled(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_score: 0,
            away_score: 0,
            completed: false,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    pub fn is_home(&self, team: &str) -> bool {
        self.home == team
    }

    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home == team {
            Some(&self.away)
        } else if self.away == team {
            Some(&self.home)
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<&str> {
        if !self.completed {
            return None;
        }
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(&self.home),
            std::cmp::Ordering::Less => Some(&self.away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn loser(&self) -> Option<&str> {
        if !self.completed {
            return None;
        }
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(&self.away),
            std::cmp::Ordering::Less => Some(&self.home),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.completed && self.home_score == self.away_score
    }

    /// Result for `team`, or `None` if the game isn't completed or the team
    /// didn't play in it.
    pub fn outcome_for(&self, team: &str) -> Option<Outcome> {
        if !self.completed || !self.involves(team) {
            return None;
        }
        if self.is_tie() {
            Some(Outcome::Tie)
        } else if self.winner() == Some(team) {
            Some(Outcome::Win)
        } else {
            Some(Outcome::Loss)
        }
    }

    pub fn points_for(&self, team: &str) -> Option<u16> {
        if self.home == team {
            Some(self.home_score)
        } else if self.away == team {
            Some(self.away_score)
        } else {
            None
        }
    }

    pub fn points_against(&self, team: &str) -> Option<u16> {
        self.opponent_of(team).and_then(|opp| self.points_for(opp))
    }

    /// Points scored minus points allowed by `team`, zero when the game
    /// isn't completed or doesn't involve the team.
    pub fn net_points(&self, team: &str) -> i32 {
        if !self.completed {
            return 0;
        }
        match (self.points_for(team), self.points_against(team)) {
            (Some(pf), Some(pa)) => i32::from(pf) - i32::from(pa),
            _ => 0,
        }
    }
}
