//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// Row counts written by one successful sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    pub standings: usize,
    pub teams: usize,
    pub players: usize,
    /// Player rows dropped because their school matched no team.
    pub excluded_players: usize,
}

/// Player row as stored, with its resolved team references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlayer {
    pub id: i64,
    pub first_name: String,
    pub lastname_initials: String,
    pub school: String,
    pub team_id: i64,
    pub regular_team_id: Option<i64>,
}
