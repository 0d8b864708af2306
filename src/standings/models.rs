//! Data models consumed and produced by the standings engine

use crate::cli::types::{MatchStatus, SeasonId, TeamId};
use serde::{Deserialize, Serialize};

/// A match as handed over by a match store.
///
/// Team names are `None` when the store could not resolve the team record,
/// and scores are `None` until both have been entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub season_id: SeasonId,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: MatchStatus,
}

impl MatchResult {
    /// A finished match with both teams resolved and both scores present.
    pub fn finished(
        season_id: SeasonId,
        home: (TeamId, &str),
        away: (TeamId, &str),
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            home_team_id: home.0,
            away_team_id: away.0,
            season_id,
            home_team_name: Some(home.1.to_string()),
            away_team_name: Some(away.1.to_string()),
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: MatchStatus::Finished,
        }
    }
}

/// One side of a scored match: a resolved team reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

/// A match that passed intake: both teams resolved, both scores present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    pub home: TeamRef,
    pub away: TeamRef,
    pub home_score: u32,
    pub away_score: u32,
}

impl ScoredMatch {
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_scores(self.home_score, self.away_score)
    }
}

/// Result classification of a scored match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchOutcome {
    pub const WIN_POINTS: u32 = 3;
    pub const DRAW_POINTS: u32 = 1;

    pub fn from_scores(home_score: u32, away_score: u32) -> Self {
        use std::cmp::Ordering;

        match home_score.cmp(&away_score) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// League points earned by (home, away).
    pub fn points(&self) -> (u32, u32) {
        match self {
            MatchOutcome::HomeWin => (Self::WIN_POINTS, 0),
            MatchOutcome::AwayWin => (0, Self::WIN_POINTS),
            MatchOutcome::Draw => (Self::DRAW_POINTS, Self::DRAW_POINTS),
        }
    }
}

/// A single team's standing in the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl LeaderboardEntry {
    pub fn new(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}

/// The ordered table of standings for a season.
pub type Leaderboard = Vec<LeaderboardEntry>;

/// A leaderboard tagged with the season it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLeaderboard {
    pub season_id: SeasonId,
    pub leaderboard: Leaderboard,
}
