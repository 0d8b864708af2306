use crate::{
    cli::types::{MatchId, MatchStatus, SeasonId, TeamId},
    error::Result,
    storage::{StoredMatch, Team},
};
use serde::{Deserialize, Serialize};


/// Team object embedded in a match payload.
///
/// The API embeds an all-zero team when the relation was not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiTeam {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

impl ApiTeam {
    pub fn is_resolved(&self) -> bool {
        self.id != 0
    }
}

/// Match as returned by `/seasons/{id}/matches/completed`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiMatch {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub season_id: SeasonId,
    #[serde(default)]
    pub home_team_score: Option<u32>,
    #[serde(default)]
    pub away_team_score: Option<u32>,
    pub status: String,
    #[serde(default)]
    pub round: Option<u32>,
    #[serde(default)]
    pub home_team: Option<ApiTeam>,
    #[serde(default)]
    pub away_team: Option<ApiTeam>,
}

impl ApiMatch {
    /// Embedded teams that carry a real record, home first.
    ///
    /// An embed whose id disagrees with the match's team id is ignored.
    pub fn team_records(&self) -> Vec<Team> {
        [
            (&self.home_team, self.home_team_id),
            (&self.away_team, self.away_team_id),
        ]
        .into_iter()
        .filter_map(|(embed, team_id)| {
            embed
                .as_ref()
                .filter(|t| t.is_resolved() && t.id == team_id.as_u32())
        })
        .map(|t| Team {
            team_id: TeamId::new(t.id),
            name: t.name.clone(),
        })
        .collect()
    }

    /// The match row to store. Fails on an unknown status string.
    pub fn to_stored(&self) -> Result<StoredMatch> {
        let status: MatchStatus = self.status.parse()?;
        Ok(StoredMatch {
            match_id: self.id,
            season_id: self.season_id,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_team_score: self.home_team_score,
            away_team_score: self.away_team_score,
            status,
            round: self.round,
        })
    }
}

/// Split a payload into team and match rows, skipping duplicate team ids.
pub fn to_storage_rows(matches: &[ApiMatch]) -> Result<(Vec<Team>, Vec<StoredMatch>)> {
    let mut teams: Vec<Team> = Vec::new();
    let mut stored = Vec::with_capacity(matches.len());

    for api_match in matches {
        for team in api_match.team_records() {
            if !teams.iter().any(|t| t.team_id == team.team_id) {
                teams.push(team);
            }
        }
        stored.push(api_match.to_stored()?);
    }

    Ok((teams, stored))
}
