//! Command implementations for the league standings CLI

pub mod import_matches;
pub mod leaderboard;
pub mod sync_matches;

use std::path::PathBuf;

use crate::{
    error::{Result, StandingsError},
    storage::MatchDatabase,
    API_URL_ENV_VAR, DB_PATH_ENV_VAR,
};

/// Pick the database path: explicit flag, then environment, then the cache dir.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_path {
        return Ok(path);
    }
    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => MatchDatabase::default_path(),
    }
}

/// Pick the league API base URL: explicit flag, then environment.
pub fn resolve_api_url(api_url: Option<String>) -> Result<String> {
    let not_blank = |url: &String| !url.trim().is_empty();
    api_url
        .filter(not_blank)
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok().filter(not_blank))
        .ok_or_else(|| StandingsError::MissingApiUrl {
            env_var: API_URL_ENV_VAR.to_string(),
        })
}

/// Open (creating if needed) the local match database.
pub fn open_database(db_path: Option<PathBuf>) -> Result<MatchDatabase> {
    let path = resolve_db_path(db_path)?;
    log::debug!("Opening match database at {}", path.display());
    MatchDatabase::open(path)
}
