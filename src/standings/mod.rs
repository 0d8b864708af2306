//! Standings engine
//!
//! Turns a season's completed matches into a ranked table in three pure
//! stages:
//! - `intake`: fetch from a [`MatchStore`] and drop unusable matches
//! - `accumulator`: fold matches into one record per team
//! - `ranker`: order the records with the tie-break chain
//!
//! Nothing is cached between calls; every leaderboard is computed from
//! scratch.

pub mod accumulator;
pub mod intake;
pub mod models;
pub mod ranker;

#[cfg(test)]
mod tests;

pub use accumulator::{accumulate, StandingsMap};
pub use intake::{
    fetch_eligible, filter_eligible, validate_season_id, InMemoryMatchStore, MatchStore,
    SkipReason,
};
pub use models::*;
pub use ranker::{compare_entries, rank};

use crate::{error::Result, SeasonId};
use log::info;
use rayon::prelude::*;

/// Compute a leaderboard from an already-fetched list of completed matches.
pub fn compute_leaderboard(matches: &[MatchResult]) -> Leaderboard {
    let eligible = filter_eligible(matches);
    rank(accumulate(&eligible).into_values())
}

/// Generate the leaderboard for one season.
///
/// Fails with `InvalidSeasonId` for a zero id without touching the store;
/// store failures are returned as-is with no partial result. A season with no
/// eligible matches yields an empty leaderboard.
pub fn generate_leaderboard<S: MatchStore + ?Sized>(
    store: &S,
    season_id: SeasonId,
) -> Result<Leaderboard> {
    let eligible = fetch_eligible(store, season_id)?;
    let leaderboard = rank(accumulate(&eligible).into_values());
    info!(
        "Season {}: {} teams from {} matches",
        season_id,
        leaderboard.len(),
        eligible.len()
    );
    Ok(leaderboard)
}

/// Generate independent leaderboards for several seasons.
///
/// All ids are validated before the store is touched, and matches are
/// fetched one season at a time. Only the computation runs in parallel.
/// Results follow the order of `season_ids`.
pub fn generate_leaderboards<S: MatchStore + ?Sized>(
    store: &S,
    season_ids: &[SeasonId],
) -> Result<Vec<SeasonLeaderboard>> {
    for season_id in season_ids {
        validate_season_id(*season_id)?;
    }

    let fetched = season_ids
        .iter()
        .map(|season_id| Ok((*season_id, store.get_completed_matches(*season_id)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(fetched
        .par_iter()
        .map(|(season_id, matches)| SeasonLeaderboard {
            season_id: *season_id,
            leaderboard: compute_leaderboard(matches),
        })
        .collect())
}
