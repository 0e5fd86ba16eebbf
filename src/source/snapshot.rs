//! Snapshot data source: JSON record files on disk.
//!
//! Files are named `{sport}_{league}_{phase}_{kind}.json`, e.g.
//! `basketball_w_playoffs_players.json`. Standings always use the `regular` phase.

use super::DataSource;
use crate::{
    cli::types::{League, SeasonPhase, Sport, WorkUnit},
    records::RecordSet,
    schema::RecordKind,
    Result, SyncError,
};
use async_trait::async_trait;
use std::{
    fs,
    io::{ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

/// Environment variable overriding the default snapshot directory.
pub const SNAPSHOT_DIR_ENV_VAR: &str = "NORTHSCORE_SNAPSHOT_DIR";

/// File name holding one record kind for a unit.
pub fn snapshot_file_name(unit: &WorkUnit, kind: RecordKind) -> String {
    let phase = match kind {
        RecordKind::Standings => SeasonPhase::Regular,
        _ => unit.phase,
    };
    format!(
        "{}_{}_{}_{}.json",
        unit.sport.as_str(),
        unit.league.as_str(),
        phase.as_str(),
        kind.as_str()
    )
}

/// Read a file into a String. A missing file is `None`; any other failure is an error.
fn try_read_to_string(path: &Path) -> std::io::Result<Option<String>> {
    let mut f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let mut s = String::new();

    f.read_to_string(&mut s)?;

    Ok(Some(s))
}

/// Write a string to file
fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, unit: &WorkUnit, kind: RecordKind) -> PathBuf {
        self.dir.join(snapshot_file_name(unit, kind))
    }

    /// Persist one record kind for a unit, creating the directory if needed.
    pub fn write(&self, unit: &WorkUnit, kind: RecordKind, records: &RecordSet) -> Result<PathBuf> {
        let path = self.path_for(unit, kind);
        write_string(&path, &serde_json::to_string_pretty(records)?)?;
        Ok(path)
    }

    fn read(&self, unit: &WorkUnit, kind: RecordKind) -> Result<Option<RecordSet>> {
        let path = self.path_for(unit, kind);
        match try_read_to_string(&path)? {
            Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            None => Ok(None),
        }
    }

    fn read_required(&self, unit: &WorkUnit, kind: RecordKind) -> Result<RecordSet> {
        self.read(unit, kind)?.ok_or_else(|| SyncError::Source {
            message: format!(
                "snapshot {} not found",
                self.path_for(unit, kind).display()
            ),
        })
    }
}

#[async_trait]
impl DataSource for SnapshotSource {
    async fn fetch_standings(&self, sport: Sport, league: League) -> Result<Option<RecordSet>> {
        let unit = WorkUnit::new(sport, league, SeasonPhase::Regular);
        self.read(&unit, RecordKind::Standings)
    }

    async fn fetch_team_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet> {
        self.read_required(&WorkUnit::new(sport, league, phase), RecordKind::Teams)
    }

    async fn fetch_player_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet> {
        self.read_required(&WorkUnit::new(sport, league, phase), RecordKind::Players)
    }
}
