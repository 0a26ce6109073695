use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum TiebreakError {
    #[error("Can't break ties for this group: {0}")]
    InvalidGroup(String),

    #[error("No schedule for team {0}")]
    MissingSchedule(String),
}

/// Errors loading a [`super::TiebreakConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("Failed to parse tiebreak config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
