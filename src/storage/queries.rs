//! Basic database query operations

use super::{models::*, schema::MatchDatabase};
use crate::{
    error::Result,
    standings::{MatchResult, MatchStore},
    MatchId, MatchStatus, SeasonId, TeamId,
};
use log::debug;
use rusqlite::{params, Row};
use std::time::{SystemTime, UNIX_EPOCH};

const UPSERT_TEAM_SQL: &str = "INSERT OR REPLACE INTO teams (team_id, name) VALUES (?, ?)";

const UPSERT_MATCH_SQL: &str = "INSERT OR REPLACE INTO matches
     (match_id, season_id, home_team_id, away_team_id,
      home_team_score, away_team_score, status, round, updated_at)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

impl MatchDatabase {
    /// Insert or update a team's basic information
    pub fn upsert_team(&mut self, team: &Team) -> Result<()> {
        self.conn
            .execute(UPSERT_TEAM_SQL, params![team.team_id.as_u32(), team.name])?;
        Ok(())
    }

    /// Insert or update a match, keyed by match id
    pub fn upsert_match(&mut self, stored: &StoredMatch) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;

        self.conn.execute(
            UPSERT_MATCH_SQL,
            params![
                stored.match_id.as_u32(),
                stored.season_id.as_u32(),
                stored.home_team_id.as_u32(),
                stored.away_team_id.as_u32(),
                stored.home_team_score,
                stored.away_team_score,
                stored.status,
                stored.round,
                now
            ],
        )?;
        Ok(())
    }

    /// Upsert a batch of teams and matches in one transaction
    pub fn store_batch(&mut self, teams: &[Team], matches: &[StoredMatch]) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
        let tx = self.conn.transaction()?;
        {
            let mut team_stmt = tx.prepare(UPSERT_TEAM_SQL)?;
            for team in teams {
                team_stmt.execute(params![team.team_id.as_u32(), team.name])?;
            }

            let mut match_stmt = tx.prepare(UPSERT_MATCH_SQL)?;
            for stored in matches {
                match_stmt.execute(params![
                    stored.match_id.as_u32(),
                    stored.season_id.as_u32(),
                    stored.home_team_id.as_u32(),
                    stored.away_team_id.as_u32(),
                    stored.home_team_score,
                    stored.away_team_score,
                    stored.status,
                    stored.round,
                    now
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Look up a single team
    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        let result = self.conn.query_row(
            "SELECT team_id, name FROM teams WHERE team_id = ?",
            params![team_id.as_u32()],
            |row| {
                Ok(Team {
                    team_id: TeamId::new(row.get(0)?),
                    name: row.get(1)?,
                })
            },
        );

        match result {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all matches of a season regardless of status, ordered by match id
    pub fn get_matches_by_season(&self, season_id: SeasonId) -> Result<Vec<StoredMatch>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_id, season_id, home_team_id, away_team_id,
                    home_team_score, away_team_score, status, round
             FROM matches
             WHERE season_id = ?
             ORDER BY match_id",
        )?;

        let rows = stmt.query_map(params![season_id.as_u32()], |row| {
            Ok(StoredMatch {
                match_id: MatchId::new(row.get(0)?),
                season_id: SeasonId::new(row.get(1)?),
                home_team_id: TeamId::new(row.get(2)?),
                away_team_id: TeamId::new(row.get(3)?),
                home_team_score: row.get(4)?,
                away_team_score: row.get(5)?,
                status: row.get(6)?,
                round: row.get(7)?,
            })
        })?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Finished matches for a season with team names joined in.
    ///
    /// A team id with no row in `teams` comes back with a `None` name.
    pub fn get_completed_match_results(&self, season_id: SeasonId) -> Result<Vec<MatchResult>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.home_team_id, m.away_team_id, m.season_id,
                    ht.name, awt.name,
                    m.home_team_score, m.away_team_score, m.status
             FROM matches m
             LEFT JOIN teams ht ON ht.team_id = m.home_team_id
             LEFT JOIN teams awt ON awt.team_id = m.away_team_id
             WHERE m.season_id = ? AND m.status = ?
             ORDER BY m.match_id",
        )?;

        let rows = stmt.query_map(
            params![season_id.as_u32(), MatchStatus::Finished],
            |row| self.row_to_match_result(row),
        )?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }

        debug!(
            "Loaded {} finished matches for season {} from database",
            results.len(),
            season_id
        );
        Ok(results)
    }

    /// Count stored matches, optionally restricted to one season
    pub fn count_matches(&self, season_id: Option<SeasonId>) -> Result<u64> {
        let count: i64 = match season_id {
            Some(season_id) => self.conn.query_row(
                "SELECT COUNT(*) FROM matches WHERE season_id = ?",
                params![season_id.as_u32()],
                |row| row.get(0),
            )?,
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?,
        };
        Ok(count as u64)
    }

    /// Remove a season's matches (used before re-syncing it)
    pub fn delete_season_matches(&mut self, season_id: SeasonId) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM matches WHERE season_id = ?",
            params![season_id.as_u32()],
        )?;
        Ok(deleted)
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM matches", [])?;
        self.conn.execute("DELETE FROM teams", [])?;
        Ok(())
    }

    /// Helper to convert a joined row to MatchResult
    pub(crate) fn row_to_match_result(&self, row: &Row) -> rusqlite::Result<MatchResult> {
        Ok(MatchResult {
            home_team_id: TeamId::new(row.get(0)?),
            away_team_id: TeamId::new(row.get(1)?),
            season_id: SeasonId::new(row.get(2)?),
            home_team_name: row.get(3)?,
            away_team_name: row.get(4)?,
            home_score: row.get(5)?,
            away_score: row.get(6)?,
            status: row.get(7)?,
        })
    }
}

impl MatchStore for MatchDatabase {
    fn get_completed_matches(&self, season_id: SeasonId) -> Result<Vec<MatchResult>> {
        self.get_completed_match_results(season_id)
    }
}
