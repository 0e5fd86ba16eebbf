//! Scheduled sync command

use crate::{
    batch::{run_batch, BatchReport},
    cli::types::{Month, Sport},
    config::{resolve_database_path, resolve_source},
    pipeline::Pipeline,
    storage::Datastore,
    Result,
};
use std::path::PathBuf;

use super::open_source;

/// Parameters for the sync command
#[derive(Debug, Clone, Default)]
pub struct SyncParams {
    /// Defaults to the local wall-clock month.
    pub month: Option<Month>,
    pub sports: Vec<Sport>,
    pub database: Option<PathBuf>,
    pub source_url: Option<String>,
    pub source_dir: Option<PathBuf>,
    pub as_json: bool,
}

/// Run one batch and print its report.
///
/// Configuration problems surface before the datastore is opened. A systemic failure is
/// returned as the error; unit failures are only listed in the report.
pub async fn handle_sync(params: SyncParams) -> Result<BatchReport> {
    let source = resolve_source(params.source_url, params.source_dir)?;
    let database = resolve_database_path(params.database)?;
    let month = params.month.unwrap_or_else(Month::current);

    tracing::info!(database = %database.display(), ?source, %month, "opening datastore");
    let mut store = Datastore::open(&database)?;
    let pipeline = Pipeline::new(open_source(&source)?);

    let report = run_batch(&pipeline, &mut store, month, &params.sports).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }

    Ok(report)
}

/// Plain text rendering of a batch report, one line per unit.
pub fn format_report(report: &BatchReport) -> String {
    let mut out = String::new();
    if report.total_units() == 0 {
        out.push_str(&format!("No sports in season for month {}\n", report.month));
        return out;
    }

    for success in &report.succeeded {
        let s = &success.summary;
        out.push_str(&format!(
            "✓ {}: {} standings, {} teams, {} players",
            success.unit, s.standings, s.teams, s.players
        ));
        if s.excluded_players > 0 {
            out.push_str(&format!(" ({} excluded)", s.excluded_players));
        }
        out.push('\n');
    }
    for failure in &report.failed {
        out.push_str(&format!("✗ {}: {}\n", failure.unit, failure.reason));
    }

    out.push_str(&format!(
        "\n{} succeeded, {} failed, {} player rows excluded\n",
        report.succeeded.len(),
        report.failed.len(),
        report.excluded_players()
    ));
    out
}
