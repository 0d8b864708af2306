//! Error types for the league standings engine

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StandingsError>;

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Invalid season ID: {raw:?}")]
    InvalidSeasonId { raw: String },

    #[error("Invalid match status: {status:?}")]
    InvalidMatchStatus { status: String },

    #[error("API URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Match repository error: {message}")]
    Repository { message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("Could not determine a cache directory for the default database path")]
    NoDataDirectory,
}

impl StandingsError {
    /// Whether the caller can fix this by changing its input.
    ///
    /// Everything else is a server-side failure (store, network, filesystem).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StandingsError::InvalidSeasonId { .. }
                | StandingsError::InvalidMatchStatus { .. }
                | StandingsError::MissingApiUrl { .. }
        )
    }
}
