//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Month, Sport};

/// Which units a run covers
#[derive(Debug, Args)]
pub struct UnitSelection {
    /// Calendar month (1-12). Defaults to the current local month.
    #[clap(long, short)]
    pub month: Option<Month>,

    /// Restrict to a sport (repeatable): `-s basketball -s ice_hockey`.
    #[clap(long = "sport", short = 's')]
    pub sports: Vec<Sport>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch, validate and sync every unit active this month.
    ///
    /// Prints a report of succeeded and failed units. Exits non-zero only when the
    /// datastore itself is unusable.
    Sync {
        #[clap(flatten)]
        selection: UnitSelection,

        /// SQLite database path (or set `NORTHSCORE_DATABASE`).
        #[clap(long)]
        database: Option<PathBuf>,

        /// Stats service base URL (or set `NORTHSCORE_SOURCE_URL`).
        #[clap(long)]
        source_url: Option<String>,

        /// Read records from snapshot files in this directory instead of HTTP.
        #[clap(long, conflicts_with = "source_url")]
        source_dir: Option<PathBuf>,

        /// Output the report as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Download raw records for every active unit into snapshot files.
    Fetch {
        #[clap(flatten)]
        selection: UnitSelection,

        /// Output directory (or set `NORTHSCORE_SNAPSHOT_DIR`).
        #[clap(long, short)]
        out: Option<PathBuf>,

        /// Stats service base URL (or set `NORTHSCORE_SOURCE_URL`).
        #[clap(long)]
        source_url: Option<String>,

        /// Output the report as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show active sports and season phases for a month.
    Seasons {
        /// Calendar month (1-12). Defaults to the current local month.
        #[clap(long, short)]
        month: Option<Month>,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Create the database and all tables, then exit.
    InitDb {
        /// SQLite database path (or set `NORTHSCORE_DATABASE`).
        #[clap(long)]
        database: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "northscore-sync",
    about = "Seasonal U SPORTS statistics sync",
    version
)]
pub struct NorthScore {
    #[clap(subcommand)]
    pub command: Commands,
}
