//! Data source adapters supplying raw records per sport, league and season phase.
//!
//! - `http`: JSON stats service over HTTP
//! - `snapshot`: JSON files on disk, as written by the `fetch` command

pub mod http;
pub mod snapshot;

pub use http::HttpSource;
pub use snapshot::SnapshotSource;

use crate::{
    cli::types::{League, SeasonPhase, Sport},
    records::RecordSet,
    Result,
};
use async_trait::async_trait;

/// Supplies standings, team aggregates and player aggregates.
///
/// Football implementations ignore `league`; football is always the men's league.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Regular season standings. `None` when the source has none for this league.
    async fn fetch_standings(&self, sport: Sport, league: League) -> Result<Option<RecordSet>>;

    async fn fetch_team_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet>;

    async fn fetch_player_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet>;
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Box<T> {
    async fn fetch_standings(&self, sport: Sport, league: League) -> Result<Option<RecordSet>> {
        (**self).fetch_standings(sport, league).await
    }

    async fn fetch_team_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet> {
        (**self).fetch_team_stats(sport, league, phase).await
    }

    async fn fetch_player_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet> {
        (**self).fetch_player_stats(sport, league, phase).await
    }
}
