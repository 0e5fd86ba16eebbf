//! Storage layer for the NorthScore sync job
//!
//! This module provides a clean abstraction over the SQLite datastore,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and table management
//! - `sync`: Atomic replace of one work unit's rows
//! - `resolve`: Player school to team identity resolution
//! - `queries`: Read-back operations

pub mod models;
pub mod queries;
pub mod resolve;
pub mod schema;
pub mod sync;


// Re-export the main types and datastore struct for easy access
pub use models::*;
pub use resolve::{ResolvedTeam, TeamResolver};
pub use schema::{Datastore, DATABASE_ENV_VAR};
