//! Fetch raw records into snapshot files without touching the datastore

use crate::{
    batch::{units_for_month, UnitFailure},
    cli::types::{Month, Sport, WorkUnit},
    config::{resolve_snapshot_dir, resolve_source_url},
    schema::RecordKind,
    source::{DataSource, HttpSource, SnapshotSource},
    Result,
};
use serde::Serialize;
use std::path::PathBuf;

/// Parameters for the fetch command
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub month: Option<Month>,
    pub sports: Vec<Sport>,
    pub out: Option<PathBuf>,
    pub source_url: Option<String>,
    pub as_json: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<UnitFailure>,
}

pub async fn handle_fetch(params: FetchParams) -> Result<FetchReport> {
    let url = resolve_source_url(params.source_url)?;
    let out = resolve_snapshot_dir(params.out)?;
    let month = params.month.unwrap_or_else(Month::current);

    let source = HttpSource::new(url)?;
    let snapshots = SnapshotSource::new(out);
    let units = units_for_month(month, &params.sports);

    let report = fetch_snapshots(&source, &snapshots, &units).await;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for path in &report.written {
            println!("✓ {}", path.display());
        }
        for failure in &report.failed {
            println!("✗ {}: {}", failure.unit, failure.reason);
        }
        println!(
            "\n{} files written to {}",
            report.written.len(),
            snapshots.dir().display()
        );
    }

    Ok(report)
}

/// Copy every unit's records from `source` into `snapshots`.
///
/// Failures are collected per unit; a unit that fails part way keeps the files already
/// written for it.
pub async fn fetch_snapshots<S: DataSource + ?Sized>(
    source: &S,
    snapshots: &SnapshotSource,
    units: &[WorkUnit],
) -> FetchReport {
    let mut report = FetchReport::default();
    for unit in units {
        match fetch_unit(source, snapshots, unit, &mut report.written).await {
            Ok(()) => tracing::info!(%unit, "snapshot written"),
            Err(e) => {
                tracing::error!(%unit, error = %e, "snapshot fetch failed");
                report.failed.push(UnitFailure {
                    unit: *unit,
                    reason: e.to_string(),
                });
            }
        }
    }
    report
}

async fn fetch_unit<S: DataSource + ?Sized>(
    source: &S,
    snapshots: &SnapshotSource,
    unit: &WorkUnit,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    if unit.phase.is_regular() {
        if let Some(standings) = source.fetch_standings(unit.sport, unit.league).await? {
            written.push(snapshots.write(unit, RecordKind::Standings, &standings)?);
        }
    }

    let teams = source
        .fetch_team_stats(unit.sport, unit.league, unit.phase)
        .await?;
    written.push(snapshots.write(unit, RecordKind::Teams, &teams)?);

    let players = source
        .fetch_player_stats(unit.sport, unit.league, unit.phase)
        .await?;
    written.push(snapshots.write(unit, RecordKind::Players, &players)?);

    Ok(())
}
