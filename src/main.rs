//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use northscore_sync::{
    cli::{Commands, NorthScore},
    commands::{
        fetch::{handle_fetch, FetchParams},
        init_db::handle_init_db,
        seasons::handle_seasons,
        sync::{handle_sync, SyncParams},
    },
};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` first, then `LOG_LEVEL` (e.g. `INFO`), then `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            std::env::var("LOG_LEVEL")
                .map_err(|e| e.to_string())
                .and_then(|level| {
                    EnvFilter::try_new(level.to_lowercase()).map_err(|e| e.to_string())
                })
        })
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let app = NorthScore::parse();

    match app.command {
        Commands::Sync {
            selection,
            database,
            source_url,
            source_dir,
            json,
        } => {
            handle_sync(SyncParams {
                month: selection.month,
                sports: selection.sports,
                database,
                source_url,
                source_dir,
                as_json: json,
            })
            .await
            .context("sync aborted")?;
        }

        Commands::Fetch {
            selection,
            out,
            source_url,
            json,
        } => {
            handle_fetch(FetchParams {
                month: selection.month,
                sports: selection.sports,
                out,
                source_url,
                as_json: json,
            })
            .await
            .context("fetch failed")?;
        }

        Commands::Seasons { month, json } => {
            handle_seasons(month, json)?;
        }

        Commands::InitDb { database } => {
            handle_init_db(database).context("could not initialize database")?;
        }
    }

    Ok(())
}
