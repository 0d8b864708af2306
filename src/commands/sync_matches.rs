//! Sync command: pull finished matches from the league API into the local store

use std::path::PathBuf;

use log::{info, warn};

use super::{open_database, resolve_api_url};
use crate::{
    api::{to_storage_rows, LeagueApiClient},
    standings::validate_season_id,
    Result, SeasonId,
};

/// Parameters for the sync command
#[derive(Debug, Clone)]
pub struct SyncParams {
    pub season_id: SeasonId,
    pub api_url: Option<String>,
    pub db_path: Option<PathBuf>,
    pub replace: bool,
}

/// Counts reported after a sync or import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreSummary {
    pub teams: usize,
    pub matches: usize,
    pub replaced: usize,
}

/// Handle the sync command
pub async fn handle_sync(params: SyncParams) -> Result<StoreSummary> {
    let season_id = validate_season_id(params.season_id)?;
    let api_url = resolve_api_url(params.api_url)?;

    let client = LeagueApiClient::new(api_url)?;
    let fetched = client.get_completed_matches(season_id).await?;

    let (teams, mut matches) = to_storage_rows(&fetched)?;
    let before = matches.len();
    matches.retain(|m| m.season_id == season_id);
    if matches.len() != before {
        warn!(
            "Dropped {} matches from other seasons in season {} response",
            before - matches.len(),
            season_id
        );
    }

    let mut db = open_database(params.db_path)?;
    let replaced = if params.replace {
        db.delete_season_matches(season_id)?
    } else {
        0
    };
    db.store_batch(&teams, &matches)?;

    let summary = StoreSummary {
        teams: teams.len(),
        matches: matches.len(),
        replaced,
    };
    info!(
        "Synced season {}: {} matches, {} teams ({} replaced)",
        season_id, summary.matches, summary.teams, summary.replaced
    );
    Ok(summary)
}
