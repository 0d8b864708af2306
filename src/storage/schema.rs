//! Database schema and connection management

use crate::error::{Result, StandingsError};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Local SQLite copy of a league's teams and matches
pub struct MatchDatabase {
    pub(crate) conn: Connection,
}

impl MatchDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open or create a database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// `<cache_dir>/league-standings/standings.db`
    pub fn default_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or(StandingsError::NoDataDirectory)?;
        Ok(cache_dir.join("league-standings").join("standings.db"))
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )",
            [],
        )?;

        // Team ids are not foreign keys; a match may reference a team with no row.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                match_id INTEGER PRIMARY KEY,
                season_id INTEGER NOT NULL,
                home_team_id INTEGER NOT NULL,
                away_team_id INTEGER NOT NULL,
                home_team_score INTEGER,
                away_team_score INTEGER,
                status TEXT NOT NULL,
                round INTEGER,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_season_status
             ON matches(season_id, status)",
            [],
        )?;

        Ok(())
    }
}
