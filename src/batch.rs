//! Batch driver: every active unit for a month, with per-unit failure isolation.

use crate::{
    cli::types::{Month, Sport, WorkUnit},
    pipeline::Pipeline,
    season::{resolve, ActiveSeasons},
    source::DataSource,
    storage::{Datastore, SyncSummary},
    Result,
};
use serde::Serialize;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Serialize)]
pub struct UnitSuccess {
    pub unit: WorkUnit,
    pub summary: SyncSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitFailure {
    pub unit: WorkUnit,
    pub reason: String,
}

/// Outcome of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub month: Month,
    pub succeeded: Vec<UnitSuccess>,
    pub failed: Vec<UnitFailure>,
}

impl BatchReport {
    pub fn new(month: Month) -> Self {
        Self {
            month,
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn total_units(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Player rows dropped across all successful units.
    pub fn excluded_players(&self) -> usize {
        self.succeeded
            .iter()
            .map(|s| s.summary.excluded_players)
            .sum()
    }
}

/// Expand the resolver output into work units, restricted to `sports` unless it is empty.
///
/// Units come out sport by sport, league by league, with phases in regular, playoffs,
/// championship order so later phases see freshly synced regular-season teams.
pub fn expand_units(active: &ActiveSeasons, sports: &[Sport]) -> Vec<WorkUnit> {
    let mut units = Vec::new();
    for (sport, phases) in active {
        if !sports.is_empty() && !sports.contains(sport) {
            continue;
        }
        for league in sport.leagues() {
            for phase in phases {
                units.push(WorkUnit::new(*sport, *league, *phase));
            }
        }
    }
    units
}

/// Work units active in `month`, optionally restricted to `sports`.
pub fn units_for_month(month: Month, sports: &[Sport]) -> Vec<WorkUnit> {
    expand_units(&resolve(month.as_u32()), sports)
}

/// Run every active unit of `month` through `pipeline`, sequentially.
///
/// Unit failures are recorded in the report and the batch moves on. A systemic failure
/// (the datastore itself is unusable) stops the batch and is returned as the error.
pub async fn run_batch<S: DataSource>(
    pipeline: &Pipeline<S>,
    store: &mut Datastore,
    month: Month,
    sports: &[Sport],
) -> Result<BatchReport> {
    store.ping()?;

    let units = units_for_month(month, sports);
    tracing::info!(month = month.as_u32(), units = units.len(), "starting batch");

    let mut report = BatchReport::new(month);
    for unit in units {
        match pipeline.run(store, &unit).await {
            Ok(summary) => report.succeeded.push(UnitSuccess { unit, summary }),
            Err(e) if e.is_systemic() => {
                tracing::error!(%unit, error = %e, "aborting batch on systemic failure");
                return Err(e);
            }
            Err(e) => report.failed.push(UnitFailure {
                unit,
                reason: e.to_string(),
            }),
        }
    }

    tracing::info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        excluded_players = report.excluded_players(),
        "batch complete"
    );
    Ok(report)
}
