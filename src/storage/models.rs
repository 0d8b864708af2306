//! Data models for the storage layer

use crate::cli::types::{MatchId, MatchStatus, SeasonId, TeamId};
use serde::{Deserialize, Serialize};

/// Team record stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
}

/// Match record stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMatch {
    pub match_id: MatchId,
    pub season_id: SeasonId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_team_score: Option<u32>,
    pub away_team_score: Option<u32>,
    pub status: MatchStatus,
    pub round: Option<u32>,
}
