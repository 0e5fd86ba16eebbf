//! Error types for the NorthScore sync job

use crate::cli::types::WorkUnit;
use rusqlite::ErrorCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Data source error: {message}")]
    Source { message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{table} failed validation: {message}")]
    Validation { table: String, message: String },

    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    #[error("Invalid value for column {column}: {value}")]
    InvalidValue { column: String, value: String },

    #[error("Datastore unavailable: {message}")]
    Systemic { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No data source configured; pass --source-url/--source-dir or set {env_var}")]
    MissingSource { env_var: String },

    #[error("Invalid month: {value} (expected 1-12)")]
    InvalidMonth { value: String },

    #[error("Unknown sport: {name}")]
    InvalidSport { name: String },

    #[error("Unknown league: {name}")]
    InvalidLeague { name: String },

    #[error("Unknown season phase: {name}")]
    InvalidPhase { name: String },

    #[error("{unit} failed: {source}")]
    Unit {
        unit: WorkUnit,
        #[source]
        source: Box<SyncError>,
    },
}

impl SyncError {
    /// Attach work unit context. Already-wrapped errors are returned unchanged.
    pub fn in_unit(self, unit: &WorkUnit) -> Self {
        match self {
            wrapped @ SyncError::Unit { .. } => wrapped,
            other => SyncError::Unit {
                unit: *unit,
                source: Box::new(other),
            },
        }
    }

    /// Map a failed write so that uniqueness/foreign-key failures surface as `Constraint`.
    pub(crate) fn from_write(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => SyncError::Constraint {
                message: err.to_string(),
            },
            _ => SyncError::Database(err),
        }
    }

    /// Whether this failure means the datastore itself is unusable.
    ///
    /// Systemic failures abort a batch; everything else is isolated to its unit.
    pub fn is_systemic(&self) -> bool {
        match self {
            SyncError::Systemic { .. } => true,
            SyncError::Database(err) => matches!(
                err.sqlite_error_code(),
                Some(
                    ErrorCode::CannotOpen
                        | ErrorCode::NotADatabase
                        | ErrorCode::DatabaseCorrupt
                        | ErrorCode::SystemIoFailure
                        | ErrorCode::DiskFull
                        | ErrorCode::ReadOnly
                        | ErrorCode::PermissionDenied
                        | ErrorCode::DatabaseBusy
                        | ErrorCode::DatabaseLocked
                )
            ),
            SyncError::Unit { source, .. } => source.is_systemic(),
            _ => false,
        }
    }
}
