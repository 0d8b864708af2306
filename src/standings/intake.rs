//! Match intake: fetch a season's completed matches and keep the usable ones

use super::models::{MatchResult, ScoredMatch, TeamRef};
use crate::{
    error::{Result, StandingsError},
    SeasonId, TeamId,
};
use log::{debug, warn};
use std::{collections::BTreeMap, fmt};

/// Source of completed matches for the standings engine.
///
/// Implementations return only matches in `finished` status for the
/// requested season. Intake trusts that contract and does not re-check
/// status.
pub trait MatchStore {
    fn get_completed_matches(&self, season_id: SeasonId) -> Result<Vec<MatchResult>>;
}

/// A match store backed by a plain list of matches.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMatchStore {
    matches: Vec<MatchResult>,
}

impl InMemoryMatchStore {
    pub fn new(matches: Vec<MatchResult>) -> Self {
        Self { matches }
    }

    pub fn push(&mut self, result: MatchResult) {
        self.matches.push(result);
    }
}

impl MatchStore for InMemoryMatchStore {
    fn get_completed_matches(&self, season_id: SeasonId) -> Result<Vec<MatchResult>> {
        Ok(self
            .matches
            .iter()
            .filter(|m| m.season_id == season_id && m.status.is_finished())
            .cloned()
            .collect())
    }
}

/// Why a completed match was left out of the standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnresolvedHomeTeam,
    UnresolvedAwayTeam,
    MissingScore,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::UnresolvedHomeTeam => "home team reference unresolved",
            SkipReason::UnresolvedAwayTeam => "away team reference unresolved",
            SkipReason::MissingScore => "score missing",
        };
        write!(f, "{}", s)
    }
}

/// Reject a zero season id before any store access.
pub fn validate_season_id(season_id: SeasonId) -> Result<SeasonId> {
    if season_id.is_valid() {
        Ok(season_id)
    } else {
        Err(StandingsError::InvalidSeasonId {
            raw: season_id.to_string(),
        })
    }
}

fn resolve_team(id: TeamId, name: Option<&String>) -> Option<TeamRef> {
    if id.as_u32() == 0 {
        return None;
    }
    name.map(|name| TeamRef {
        id,
        name: name.clone(),
    })
}

/// Check a single match for usability.
pub fn to_scored_match(result: &MatchResult) -> std::result::Result<ScoredMatch, SkipReason> {
    let home = resolve_team(result.home_team_id, result.home_team_name.as_ref())
        .ok_or(SkipReason::UnresolvedHomeTeam)?;
    let away = resolve_team(result.away_team_id, result.away_team_name.as_ref())
        .ok_or(SkipReason::UnresolvedAwayTeam)?;

    let (Some(home_score), Some(away_score)) = (result.home_score, result.away_score) else {
        return Err(SkipReason::MissingScore);
    };

    Ok(ScoredMatch {
        home,
        away,
        home_score,
        away_score,
    })
}

/// Split matches into the usable ones and a per-season count of the rest.
pub(crate) fn partition_eligible(
    matches: &[MatchResult],
) -> (Vec<ScoredMatch>, BTreeMap<SeasonId, usize>) {
    let mut eligible = Vec::with_capacity(matches.len());
    let mut skipped: BTreeMap<SeasonId, usize> = BTreeMap::new();

    for result in matches {
        match to_scored_match(result) {
            Ok(scored) => eligible.push(scored),
            Err(reason) => {
                *skipped.entry(result.season_id).or_default() += 1;
                debug!(
                    "Skipping match {} vs {} in season {}: {}",
                    result.home_team_id, result.away_team_id, result.season_id, reason
                );
            }
        }
    }

    (eligible, skipped)
}

/// Keep the matches that can contribute to a table, in their original order.
///
/// Unusable matches are dropped without failing the computation.
pub fn filter_eligible(matches: &[MatchResult]) -> Vec<ScoredMatch> {
    let (eligible, skipped) = partition_eligible(matches);

    for (season_id, count) in skipped {
        let total = matches.iter().filter(|m| m.season_id == season_id).count();
        warn!(
            "Season {}: skipped {} of {} completed matches (unresolved team or missing score)",
            season_id, count, total
        );
    }

    eligible
}

/// Validate the season id, fetch once from the store, and filter.
///
/// Store errors are returned unchanged.
pub fn fetch_eligible<S: MatchStore + ?Sized>(
    store: &S,
    season_id: SeasonId,
) -> Result<Vec<ScoredMatch>> {
    let season_id = validate_season_id(season_id)?;
    let matches = store.get_completed_matches(season_id)?;
    debug!(
        "Fetched {} completed matches for season {}",
        matches.len(),
        season_id
    );
    Ok(filter_eligible(&matches))
}
