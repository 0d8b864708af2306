//! Import command: load match records from a JSON file into the local store

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::{open_database, sync_matches::StoreSummary};
use crate::{
    api::{to_storage_rows, ApiMatch},
    Result,
};

/// Parameters for the import command
#[derive(Debug, Clone)]
pub struct ImportParams {
    pub file: PathBuf,
    pub db_path: Option<PathBuf>,
    pub replace: bool,
}

/// Parse a JSON array of match records in the league API shape.
pub fn read_match_file(file: &Path) -> Result<Vec<ApiMatch>> {
    let contents = fs::read_to_string(file)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Handle the import command
///
/// With `replace`, every season present in the file is cleared first.
pub fn handle_import(params: ImportParams) -> Result<StoreSummary> {
    let records = read_match_file(&params.file)?;
    let (teams, matches) = to_storage_rows(&records)?;

    let mut db = open_database(params.db_path)?;
    let mut replaced = 0;
    if params.replace {
        let seasons: BTreeSet<_> = matches.iter().map(|m| m.season_id).collect();
        for season_id in seasons {
            replaced += db.delete_season_matches(season_id)?;
        }
    }
    db.store_batch(&teams, &matches)?;

    info!(
        "Imported {} matches and {} teams from {}",
        matches.len(),
        teams.len(),
        params.file.display()
    );
    Ok(StoreSummary {
        teams: teams.len(),
        matches: matches.len(),
        replaced,
    })
}
