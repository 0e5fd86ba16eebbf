//! NorthScore Sync Library
//!
//! A scheduled synchronization job that keeps a SQLite store of U SPORTS standings, team
//! statistics and player statistics in step with the latest snapshot from a stats source.
//!
//! ## Features
//!
//! - **Seasonal Activation**: A fixed yearly calendar decides which sports and season
//!   phases are worth fetching in a given month
//! - **Schema Validation**: Fetched records are checked against per-sport column contracts
//!   and the list of member schools before any write
//! - **Atomic Sync**: Each (sport, league, phase) is replaced in one transaction, with
//!   player rows resolved to their team rows by school name
//! - **Failure Isolation**: A failing unit is reported and the batch moves on; only a broken
//!   datastore stops the run
//! - **Pluggable Sources**: Records come from an HTTP stats service or from JSON snapshots
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use northscore_sync::{batch::run_batch, pipeline::Pipeline, source::HttpSource,
//!     storage::Datastore, Month};
//!
//! # async fn example() -> northscore_sync::Result<()> {
//! let pipeline = Pipeline::new(HttpSource::new("http://localhost:8080")?);
//! let mut store = Datastore::open(&Datastore::default_path()?)?;
//!
//! let report = run_batch(&pipeline, &mut store, Month::current(), &[]).await?;
//! println!("{} units synced", report.succeeded.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NORTHSCORE_SOURCE_URL=http://localhost:8080
//! export NORTHSCORE_DATABASE=/var/lib/northscore/northscore.db
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod records;
pub mod schema;
pub mod season;
pub mod source;
pub mod storage;
pub mod validate;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use cli::types::{League, Month, SeasonPhase, Sport, WorkUnit};
pub use error::{Result, SyncError};
