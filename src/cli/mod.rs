//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::SeasonId;

/// Storage location shared between commands
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// SQLite database path (or set `LEAGUE_STANDINGS_DB` env var).
    #[clap(long)]
    pub db: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the ranked leaderboard for one or more seasons.
    ///
    /// Reads finished matches from the local store; run `sync` or `import` first.
    Leaderboard {
        /// Season ID (repeatable): `-s 1 -s 2` or `-s 1 2`.
        #[clap(long, short, required = true, num_args = 1..)]
        season: Vec<SeasonId>,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,

        #[clap(flatten)]
        store: StoreArgs,
    },

    /// Fetch completed matches for a season from the league API.
    ///
    /// Queries `/api/v1/seasons/{id}/matches/completed` and stores the result locally.
    Sync {
        /// Season ID.
        #[clap(long, short)]
        season: SeasonId,

        /// League API base URL (or set `LEAGUE_API_URL` env var).
        #[clap(long)]
        api_url: Option<String>,

        /// Delete the season's stored matches before writing the fetched ones.
        #[clap(long)]
        replace: bool,

        #[clap(flatten)]
        store: StoreArgs,
    },

    /// Load match records from a JSON file in the league API shape.
    Import {
        /// Path to a JSON array of match records.
        #[clap(long, short)]
        file: PathBuf,

        /// Delete stored matches of every season in the file before writing.
        #[clap(long)]
        replace: bool,

        #[clap(flatten)]
        store: StoreArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "league-standings", about = "League standings calculator", version)]
pub struct StandingsCli {
    /// Enable debug logging (overrides `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
