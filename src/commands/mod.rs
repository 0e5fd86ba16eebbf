//! Command implementations for the NorthScore sync CLI

pub mod fetch;
pub mod init_db;
pub mod seasons;
pub mod sync;


use crate::{
    config::SourceConfig,
    source::{DataSource, HttpSource, SnapshotSource},
    Result,
};

/// Build the data source a run should read from.
pub fn open_source(config: &SourceConfig) -> Result<Box<dyn DataSource>> {
    let source: Box<dyn DataSource> = match config {
        SourceConfig::Http(url) => Box::new(HttpSource::new(url.clone())?),
        SourceConfig::Snapshot(dir) => Box::new(SnapshotSource::new(dir.clone())),
    };
    Ok(source)
}
