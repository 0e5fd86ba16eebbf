//! Fetch, validate and sync for a single work unit.
//!
//! One generic [`Pipeline`] drives every sport: the per-sport differences live entirely in the
//! column contracts returned by [`schema_for`].

use crate::{
    cli::types::WorkUnit,
    records::UnitData,
    schema::{schema_for, valid_schools},
    source::DataSource,
    storage::{Datastore, SyncSummary},
    validate::validate_unit,
    Result,
};
use std::collections::HashSet;
use tracing::Instrument;


/// Single-shot orchestrator over a data source. Holds no state between units.
pub struct Pipeline<S> {
    source: S,
    valid_schools: HashSet<String>,
}

impl<S: DataSource> Pipeline<S> {
    /// Pipeline validating organizations against the U SPORTS member list.
    pub fn new(source: S) -> Self {
        Self::with_valid_schools(source, valid_schools())
    }

    pub fn with_valid_schools(source: S, valid_schools: HashSet<String>) -> Self {
        Self {
            source,
            valid_schools,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch everything for `unit`.
    ///
    /// Standings are requested only for the regular season. Player rows without a first
    /// name are dropped before anything else sees them.
    pub async fn fetch(&self, unit: &WorkUnit) -> Result<UnitData> {
        let standings = if unit.phase.is_regular() {
            self.source.fetch_standings(unit.sport, unit.league).await?
        } else {
            None
        };
        let teams = self
            .source
            .fetch_team_stats(unit.sport, unit.league, unit.phase)
            .await?;
        let mut players = self
            .source
            .fetch_player_stats(unit.sport, unit.league, unit.phase)
            .await?;

        let dropped = players.drop_unset("first_name");
        if dropped > 0 {
            tracing::debug!(%unit, dropped, "dropped player rows without a first name");
        }

        Ok(UnitData {
            standings,
            teams,
            players,
        })
    }

    pub fn validate(&self, unit: &WorkUnit, data: &UnitData) -> Result<()> {
        validate_unit(schema_for(unit.sport), data, &self.valid_schools)
    }

    /// Run fetch, validate and sync for one unit.
    ///
    /// Any failure fails the whole unit and comes back wrapped with the unit it belongs to.
    /// Nothing is written unless validation passes.
    pub async fn run(&self, store: &mut Datastore, unit: &WorkUnit) -> Result<SyncSummary> {
        let span = tracing::info_span!(
            "unit",
            sport = %unit.sport,
            league = %unit.league,
            phase = %unit.phase
        );

        async {
            tracing::info!("starting unit");
            let result = async {
                let data = self.fetch(unit).await?;
                self.validate(unit, &data)?;
                store.sync_unit(unit, &data)
            }
            .await;

            match &result {
                Ok(summary) => tracing::info!(
                    standings = summary.standings,
                    teams = summary.teams,
                    players = summary.players,
                    excluded_players = summary.excluded_players,
                    "unit synced"
                ),
                Err(e) => tracing::error!(error = %e, "unit failed"),
            }
            result.map_err(|e| e.in_unit(unit))
        }
        .instrument(span)
        .await
    }
}
