//! League Standings Library
//!
//! Computes ranked league tables from completed match results, with a local
//! SQLite match store and a client for the league API that feeds it.
//!
//! ## Ranking
//!
//! Teams are ordered by points, then goal difference, then goals scored, then
//! name. A win is worth 3 points and a draw 1. Matches with an unresolved team
//! or a missing score are left out of the table.
//!
//! ## Quick Start
//!
//! ```rust
//! use league_standings::{compute_leaderboard, MatchResult, SeasonId, TeamId};
//!
//! let season = SeasonId::new(1);
//! let table = compute_leaderboard(&[
//!     MatchResult::finished(season, (TeamId::new(1), "Alpha"), (TeamId::new(2), "Beta"), 3, 1),
//! ]);
//!
//! assert_eq!(table[0].team_name, "Alpha");
//! assert_eq!(table[0].points, 3);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export LEAGUE_API_URL=http://localhost:8080
//! export LEAGUE_STANDINGS_DB=/var/lib/league/standings.db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod standings;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{MatchId, MatchStatus, SeasonId, TeamId};
pub use error::{Result, StandingsError};
pub use standings::{
    compute_leaderboard, generate_leaderboard, generate_leaderboards, InMemoryMatchStore,
    Leaderboard, LeaderboardEntry, MatchResult, MatchStore, SeasonLeaderboard,
};

pub const API_URL_ENV_VAR: &str = "LEAGUE_API_URL";
pub const DB_PATH_ENV_VAR: &str = "LEAGUE_STANDINGS_DB";
