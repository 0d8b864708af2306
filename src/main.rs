//! Entry point: parse CLI and dispatch to command handlers.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use league_standings::{
    cli::{Commands, StandingsCli},
    commands::{
        import_matches::{handle_import, ImportParams},
        leaderboard::{handle_leaderboard, LeaderboardParams},
        sync_matches::{handle_sync, SyncParams},
    },
    StandingsError,
};

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(app: StandingsCli) -> anyhow::Result<()> {
    match app.command {
        Commands::Leaderboard { season, json, store } => {
            handle_leaderboard(LeaderboardParams {
                season_ids: season,
                as_json: json,
                db_path: store.db,
            })
            .context("failed to build leaderboard")?;
        }

        Commands::Sync {
            season,
            api_url,
            replace,
            store,
        } => {
            let summary = handle_sync(SyncParams {
                season_id: season,
                api_url,
                db_path: store.db,
                replace,
            })
            .await
            .with_context(|| format!("failed to sync season {season}"))?;
            println!(
                "Synced {} matches and {} teams for season {}",
                summary.matches, summary.teams, season
            );
        }

        Commands::Import {
            file,
            replace,
            store,
        } => {
            let summary = handle_import(ImportParams {
                file: file.clone(),
                db_path: store.db,
                replace,
            })
            .with_context(|| format!("failed to import {}", file.display()))?;
            println!(
                "Imported {} matches and {} teams",
                summary.matches, summary.teams
            );
        }
    }

    Ok(())
}

/// Exit with 2 for bad input, 1 for store or network failures.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<StandingsError>() {
        Some(e) if e.is_client_error() => ExitCode::from(2),
        _ => ExitCode::from(1),
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let app = StandingsCli::parse();
    init_logging(app.verbose);

    match run(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    }
}
