use rand::{SeedableRng, rngs::StdRng};

use super::errors::ConfigError;

/// Knobs for the tiebreak engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiebreakConfig {
    /// Common games criteria that require a minimum sample skip when any
    /// tied team has fewer games than this.
    pub min_common_games: u32,
    /// Groups spread over more divisions than this are rejected.
    pub max_divisions: usize,
    /// Number of division winner seeds in each conference.
    pub divisions_per_conference: u8,
    /// Optional random seed for a reproducible coin toss
    pub seed: Option<u64>,
}

impl Default for TiebreakConfig {
    fn default() -> Self {
        Self {
            min_common_games: 4,
            max_divisions: 8,
            divisions_per_conference: 4,
            seed: None,
        }
    }
}

impl TiebreakConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_common_games == 0 {
            return Err(ConfigError::Validation(
                "min_common_games must be greater than 0".to_string(),
            ));
        }

        if self.max_divisions == 0 {
            return Err(ConfigError::Validation(
                "max_divisions must be greater than 0".to_string(),
            ));
        }

        if self.divisions_per_conference == 0 {
            return Err(ConfigError::Validation(
                "divisions_per_conference must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TiebreakConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The coin toss source this config asks for: seeded when `seed` is
    /// set, otherwise from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
