//! Ready made tie situations for exercising the engine.
//!
//! Every scenario builds a small league schedule, aggregates it and keeps
//! only the tied teams. Entries come back in league table order.
use crate::core::{Entry, Game, League, LeagueSchedule, Schedules, filter_entries};
use crate::stats::create_entries;

const BENGALS: &str = "Cincinnati Bengals";
const BILLS: &str = "Buffalo Bills";
const BRONCOS: &str = "Denver Broncos";
const BROWNS: &str = "Cleveland Browns";
const CARDINALS: &str = "Arizona Cardinals";
const CHIEFS: &str = "Kansas City Chiefs";
const COLTS: &str = "Indianapolis Colts";
const COMMANDERS: &str = "Washington Commanders";
const COWBOYS: &str = "Dallas Cowboys";
const DOLPHINS: &str = "Miami Dolphins";
const EAGLES: &str = "Philadelphia Eagles";
const GIANTS: &str = "New York Giants";
const JAGUARS: &str = "Jacksonville Jaguars";
const JETS: &str = "New York Jets";
const PATRIOTS: &str = "New England Patriots";
const RAMS: &str = "Los Angeles Rams";
const RAVENS: &str = "Baltimore Ravens";
const STEELERS: &str = "Pittsburgh Steelers";
const TEXANS: &str = "Houston Texans";
const TITANS: &str = "Tennessee Titans";

#[derive(Debug, Clone)]
pub struct Scenario {
    pub entries: Vec<Entry>,
    pub schedules: Schedules,
}

/// Adds every game in a period of its own so nobody is ever double booked.
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    games: Vec<Game>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(mut self, home: &str, away: &str, home_score: u16, away_score: u16) -> Self {
        self.games
            .push(Game::final_score(home, away, home_score, away_score));
        self
    }

    pub fn schedule(&self) -> LeagueSchedule {
        let mut schedule = LeagueSchedule::new(self.games.len());
        for (period, game) in self.games.iter().enumerate() {
            schedule
                .add_game(period, game.clone())
                .expect("scenario games are valid");
        }
        schedule
    }

    /// Aggregate on the NFL table and keep only `teams`.
    pub fn build(self, teams: &[&str]) -> Scenario {
        let league = League::nfl();
        let schedule = self.schedule();
        let entries = create_entries(&league, &schedule).expect("scenario teams are NFL teams");
        let schedules = schedule
            .split_to_teams(&league)
            .expect("scenario teams are NFL teams");
        Scenario {
            entries: filter_entries(&entries, teams),
            schedules,
        }
    }
}

impl Scenario {
    /// Patriots and Jets both 1-1, Patriots won the game between them.
    pub fn division_two_clubs_head_to_head() -> Self {
        ScenarioBuilder::new()
            .game(PATRIOTS, JETS, 20, 10)
            .game(BILLS, PATRIOTS, 20, 10)
            .game(JETS, DOLPHINS, 20, 10)
            .build(&[PATRIOTS, JETS])
    }

    /// Patriots 1-0 in the division, Jets 0-1.
    pub fn division_two_clubs_division_record() -> Self {
        ScenarioBuilder::new()
            .game(BILLS, PATRIOTS, 10, 20)
            .game(PATRIOTS, BENGALS, 10, 20)
            .game(JETS, DOLPHINS, 10, 20)
            .game(STEELERS, JETS, 10, 20)
            .build(&[PATRIOTS, JETS])
    }

    /// Both played the Texans; only the Patriots beat them.
    pub fn division_two_clubs_common_games() -> Self {
        ScenarioBuilder::new()
            .game(TEXANS, PATRIOTS, 10, 20)
            .game(PATRIOTS, BENGALS, 10, 20)
            .game(STEELERS, JETS, 10, 20)
            .game(JETS, TEXANS, 10, 20)
            .build(&[PATRIOTS, JETS])
    }

    /// Patriots won their conference game, the Jets lost theirs.
    pub fn division_two_clubs_conference_record() -> Self {
        ScenarioBuilder::new()
            .game(TEXANS, PATRIOTS, 10, 20)
            .game(PATRIOTS, CARDINALS, 10, 20)
            .game(STEELERS, JETS, 20, 10)
            .game(JETS, GIANTS, 20, 10)
            .build(&[PATRIOTS, JETS])
    }

    /// Patriots beat the 1-1 Texans, Jets beat the 0-2 Titans.
    pub fn division_two_clubs_strength_of_victory() -> Self {
        ScenarioBuilder::new()
            .game(PATRIOTS, TEXANS, 20, 10)
            .game(COLTS, PATRIOTS, 20, 10)
            .game(JETS, TITANS, 20, 10)
            .game(JAGUARS, JETS, 20, 10)
            .game(TEXANS, BRONCOS, 20, 10)
            .game(CHIEFS, TITANS, 20, 10)
            .build(&[PATRIOTS, JETS])
    }

    /// Same wins, but the Patriots lost to the 2-0 Colts and the Jets to the
    /// 1-1 Jaguars.
    pub fn division_two_clubs_strength_of_schedule() -> Self {
        ScenarioBuilder::new()
            .game(PATRIOTS, TEXANS, 20, 10)
            .game(COLTS, PATRIOTS, 20, 10)
            .game(JETS, TITANS, 20, 10)
            .game(JAGUARS, JETS, 20, 10)
            .game(COLTS, BRONCOS, 20, 10)
            .game(CHIEFS, JAGUARS, 20, 10)
            .build(&[PATRIOTS, JETS])
    }

    /// Patriots scored more, both allowed the same.
    pub fn division_two_clubs_conference_rank() -> Self {
        ScenarioBuilder::new()
            .game(PATRIOTS, TEXANS, 30, 0)
            .game(COLTS, PATRIOTS, 10, 0)
            .game(JETS, TITANS, 20, 0)
            .game(JAGUARS, JETS, 10, 0)
            .build(&[PATRIOTS, JETS])
    }

    /// Level on conference ranks, but the Giants' 25 points sit between the
    /// Patriots and Jets in the league wide points scored ranking.
    pub fn division_two_clubs_league_rank() -> Self {
        ScenarioBuilder::new()
            .game(PATRIOTS, TEXANS, 30, 10)
            .game(CARDINALS, PATRIOTS, 3, 0)
            .game(JETS, TITANS, 20, 0)
            .game(RAMS, JETS, 7, 0)
            .game(GIANTS, EAGLES, 25, 0)
            .build(&[PATRIOTS, JETS])
    }

    /// Identical point totals, but the Patriots beat the common opponent by
    /// more.
    pub fn division_two_clubs_net_points_common_games() -> Self {
        ScenarioBuilder::new()
            .game(PATRIOTS, TEXANS, 30, 10)
            .game(COLTS, PATRIOTS, 20, 10)
            .game(JETS, TEXANS, 25, 10)
            .game(JAGUARS, JETS, 20, 15)
            .build(&[PATRIOTS, JETS])
    }

    /// The whole AFC East at 1-1. The Bills and Dolphins won their
    /// division games, the Patriots and Jets lost theirs. The Bills have
    /// the better conference record and the Patriots scored more.
    pub fn division_four_clubs_split_head_to_head() -> Self {
        ScenarioBuilder::new()
            .game(BILLS, JETS, 20, 10)
            .game(DOLPHINS, PATRIOTS, 20, 10)
            .game(COWBOYS, BILLS, 20, 10)
            .game(TEXANS, DOLPHINS, 20, 10)
            .game(PATRIOTS, TITANS, 30, 10)
            .game(JETS, COLTS, 20, 10)
            .build(&[BILLS, DOLPHINS, PATRIOTS, JETS])
    }

    /// Bills, Dolphins, Colts and Broncos at 2-2. The Bills beat the
    /// Dolphins for the division, and the Broncos lost to both other
    /// division leaders but beat the Dolphins.
    pub fn conference_worst_leader_beat_discard() -> Self {
        ScenarioBuilder::new()
            .game(BILLS, BRONCOS, 20, 10)
            .game(COLTS, BRONCOS, 20, 10)
            .game(BRONCOS, DOLPHINS, 20, 10)
            .game(BILLS, DOLPHINS, 20, 10)
            .game(COWBOYS, BILLS, 20, 10)
            .game(GIANTS, BILLS, 20, 10)
            .game(COLTS, COMMANDERS, 20, 10)
            .game(TEXANS, COLTS, 20, 10)
            .game(EAGLES, COLTS, 20, 10)
            .game(BRONCOS, RAMS, 20, 10)
            .game(DOLPHINS, CARDINALS, 20, 10)
            .game(DOLPHINS, EAGLES, 20, 10)
            .build(&[BILLS, DOLPHINS, COLTS, BRONCOS])
    }

    /// Bills, Colts and Broncos at 2-2 from three divisions. The Colts have
    /// the best conference record; the Broncos beat the Bills.
    pub fn conference_three_clubs_conference_record() -> Self {
        ScenarioBuilder::new()
            .game(COLTS, TEXANS, 20, 10)
            .game(COLTS, TITANS, 20, 10)
            .game(JAGUARS, COLTS, 20, 10)
            .game(COWBOYS, COLTS, 20, 10)
            .game(BRONCOS, BILLS, 20, 10)
            .game(CHIEFS, BRONCOS, 20, 10)
            .game(BRONCOS, GIANTS, 20, 10)
            .game(EAGLES, BRONCOS, 20, 10)
            .game(BILLS, JETS, 20, 10)
            .game(BILLS, COMMANDERS, 20, 10)
            .game(COWBOYS, BILLS, 20, 10)
            .build(&[BILLS, COLTS, BRONCOS])
    }

    /// Bills and Dolphins (who the Bills swept) tied with the Colts at 2-2.
    pub fn conference_wildcard_with_division_rivals() -> Self {
        ScenarioBuilder::new()
            .game(BILLS, DOLPHINS, 20, 10)
            .game(DOLPHINS, BILLS, 10, 20)
            .game(GIANTS, BILLS, 20, 10)
            .game(COWBOYS, BILLS, 20, 10)
            .game(DOLPHINS, EAGLES, 20, 10)
            .game(DOLPHINS, COMMANDERS, 20, 10)
            .game(COLTS, TEXANS, 20, 10)
            .game(COLTS, TITANS, 20, 10)
            .game(JAGUARS, COLTS, 20, 10)
            .game(CHIEFS, COLTS, 20, 10)
            .build(&[BILLS, DOLPHINS, COLTS])
    }

    /// Bills and Colts at 1-1 with one common opponent the Bills beat. The
    /// Colts' win came against a better team.
    pub fn conference_two_clubs_few_common_games() -> Self {
        ScenarioBuilder::new()
            .game(BILLS, TEXANS, 20, 10)
            .game(STEELERS, BILLS, 20, 10)
            .game(TEXANS, COLTS, 20, 10)
            .game(COLTS, RAVENS, 20, 10)
            .game(RAVENS, BROWNS, 20, 10)
            .game(RAVENS, BENGALS, 20, 10)
            .build(&[BILLS, COLTS])
    }

    /// Bills and Dolphins from the AFC East with the Cowboys, all 1-1.
    pub fn league_three_clubs() -> Self {
        ScenarioBuilder::new()
            .game(BILLS, DOLPHINS, 20, 10)
            .game(JETS, BILLS, 20, 10)
            .game(DOLPHINS, PATRIOTS, 20, 10)
            .game(COWBOYS, GIANTS, 40, 10)
            .game(EAGLES, COWBOYS, 20, 10)
            .build(&[BILLS, DOLPHINS, COWBOYS])
    }

    /// Bills 2-0, Dolphins 1-1, Ravens 1-2, Bengals 0-2.
    pub fn seeding() -> Self {
        ScenarioBuilder::new()
            .game(BILLS, JETS, 20, 10)
            .game(DOLPHINS, PATRIOTS, 20, 10)
            .game(RAVENS, BROWNS, 20, 10)
            .game(STEELERS, BENGALS, 20, 10)
            .game(BILLS, PATRIOTS, 20, 10)
            .game(JETS, DOLPHINS, 20, 10)
            .game(STEELERS, RAVENS, 20, 10)
            .game(BROWNS, BENGALS, 20, 10)
            .game(TEXANS, RAVENS, 20, 10)
            .build(&[BILLS, DOLPHINS, RAVENS, BENGALS])
    }
}
