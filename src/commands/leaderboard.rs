//! Leaderboard command implementation

use std::fmt::Write as _;
use std::path::PathBuf;

use super::open_database;
use crate::{
    standings::{generate_leaderboards, validate_season_id, Leaderboard, SeasonLeaderboard},
    Result, SeasonId,
};

/// Parameters for the leaderboard command
#[derive(Debug, Clone)]
pub struct LeaderboardParams {
    pub season_ids: Vec<SeasonId>,
    pub as_json: bool,
    pub db_path: Option<PathBuf>,
}

/// Render one season's table as aligned text.
pub fn format_table(leaderboard: &Leaderboard) -> String {
    let name_width = leaderboard
        .iter()
        .map(|e| e.team_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts",
    );

    for (position, entry) in leaderboard.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}",
            position + 1,
            entry.team_name,
            entry.played,
            entry.won,
            entry.drawn,
            entry.lost,
            entry.goals_for,
            entry.goals_against,
            entry.goal_difference,
            entry.points,
        );
    }

    out
}

/// JSON output: a bare array for one season, tagged tables for several.
pub fn render_json(tables: &[SeasonLeaderboard]) -> Result<String> {
    let json = match tables {
        [single] => serde_json::to_string_pretty(&single.leaderboard)?,
        _ => serde_json::to_string_pretty(tables)?,
    };
    Ok(json)
}

/// Handle the leaderboard command
pub fn handle_leaderboard(params: LeaderboardParams) -> Result<()> {
    for season_id in &params.season_ids {
        validate_season_id(*season_id)?;
    }
    let db = open_database(params.db_path)?;
    let tables = generate_leaderboards(&db, &params.season_ids)?;

    if params.as_json {
        println!("{}", render_json(&tables)?); // tarpaulin::skip
        return Ok(());
    }

    for table in &tables {
        // tarpaulin::skip - console output
        println!("Season {}", table.season_id);
        if table.leaderboard.is_empty() {
            println!("  No completed matches.");
        } else {
            print!("{}", format_table(&table.leaderboard));
        }
        println!();
    }

    Ok(())
}
