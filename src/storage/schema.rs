//! Datastore connection and table management

use crate::{
    cli::types::Sport,
    schema::{schema_for, Column, SportSchema},
    Result, SyncError,
};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the default database path.
pub const DATABASE_ENV_VAR: &str = "NORTHSCORE_DATABASE";

/// Handle to the SQLite datastore, opened once per batch run.
pub struct Datastore {
    pub(crate) conn: Connection,
}

impl Datastore {
    /// Open (or create) the database at `path` and ensure all tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory datastore, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Default database location: `<data dir>/northscore/northscore.db`
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| SyncError::Config {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("northscore").join("northscore.db"))
    }

    /// Fail with a systemic error when the connection can no longer serve queries.
    pub fn ping(&self) -> Result<()> {
        self.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map(|_| ())
            .map_err(|e| SyncError::Systemic {
                message: e.to_string(),
            })
    }

    /// Create the standings/team/player tables for every sport
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        for sport in Sport::ALL {
            self.conn.execute_batch(&table_ddl(schema_for(sport)))?;
        }
        Ok(())
    }
}

fn column_defs(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| {
            let not_null = if c.not_null { " NOT NULL" } else { "" };
            format!("{} {}{}", c.name, c.ty.sql(), not_null)
        })
        .collect::<Vec<_>>()
        .join(",\n    ")
}

/// DDL for one sport. Rows of every league and phase share a table, discriminated by the
/// `league` / `season_option` columns.
fn table_ddl(schema: &SportSchema) -> String {
    let sport = schema.sport.as_str();
    let standings = schema.standings_table();
    let teams = schema.team_table();
    let players = schema.player_table();

    format!(
        "CREATE TABLE IF NOT EXISTS {standings} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    league TEXT NOT NULL,
    {standing_cols},
    UNIQUE (league, team_name)
);

CREATE TABLE IF NOT EXISTS {teams} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    league TEXT NOT NULL,
    season_option TEXT NOT NULL,
    {team_cols},
    UNIQUE (league, season_option, team_name)
);

CREATE TABLE IF NOT EXISTS {players} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    league TEXT NOT NULL,
    season_option TEXT NOT NULL,
    team_id INTEGER NOT NULL REFERENCES {teams}(id) ON DELETE CASCADE,
    regular_team_id INTEGER,
    {player_cols}
);

CREATE INDEX IF NOT EXISTS ix_{sport}_team_scope ON {teams}(league, season_option);
CREATE INDEX IF NOT EXISTS ix_{sport}_player_roster ON {players}(league, season_option, school);
CREATE INDEX IF NOT EXISTS ix_{sport}_player_team ON {players}(team_id);
{leaderboards}",
        standing_cols = column_defs(schema.standings),
        team_cols = column_defs(schema.teams),
        player_cols = column_defs(schema.players),
        leaderboards = leaderboard_ddl(schema),
    )
}

fn leaderboard_ddl(schema: &SportSchema) -> String {
    let sport = schema.sport.as_str();
    let players = schema.player_table();
    schema
        .leaderboards
        .iter()
        .map(|board| {
            format!(
                "CREATE INDEX IF NOT EXISTS ix_{sport}_player_{name} \
                 ON {players}(league, season_option, {columns});",
                name = board.name,
                columns = board.columns.join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
