//! Column contracts for every sport.
//!
//! Each sport has three record kinds (standings, team stats, player stats). The ordered
//! column list of a kind is both the contract fetched records are validated against and the
//! physical column set of the matching table.

mod basketball;
mod football;
mod ice_hockey;
mod schools;
mod soccer;
mod volleyball;

pub use schools::{valid_schools, VALID_SCHOOLS};

use crate::cli::types::Sport;
use std::fmt;

/// SQLite storage class a column is coerced to on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    pub fn sql(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub not_null: bool,
}

pub(crate) const fn int(name: &'static str) -> Column {
    Column {
        name,
        ty: ColumnType::Integer,
        not_null: false,
    }
}

pub(crate) const fn real(name: &'static str) -> Column {
    Column {
        name,
        ty: ColumnType::Real,
        not_null: false,
    }
}

pub(crate) const fn text(name: &'static str) -> Column {
    Column {
        name,
        ty: ColumnType::Text,
        not_null: false,
    }
}

/// Text column that must always be present (names and identifiers).
pub(crate) const fn key(name: &'static str) -> Column {
    Column {
        name,
        ty: ColumnType::Text,
        not_null: true,
    }
}

/// The three record kinds fetched per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Standings,
    Teams,
    Players,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Standings => "standings",
            RecordKind::Teams => "teams",
            RecordKind::Players => "players",
        }
    }

    /// Column holding the organization name checked against the valid school set.
    pub fn org_column(&self) -> &'static str {
        match self {
            RecordKind::Standings | RecordKind::Teams => "team_name",
            RecordKind::Players => "school",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed set of allowed values for one player column.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub column: &'static str,
    pub allowed: &'static [&'static str],
}

/// A player-table index over `(league, season_option, ..columns)`, named
/// `ix_{sport}_player_{name}`.
#[derive(Debug, Clone, Copy)]
pub struct Leaderboard {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

#[derive(Debug)]
pub struct SportSchema {
    pub sport: Sport,
    pub standings: &'static [Column],
    pub teams: &'static [Column],
    pub players: &'static [Column],
    pub player_rules: &'static [CategoryRule],
    pub leaderboards: &'static [Leaderboard],
}

impl SportSchema {
    pub fn columns(&self, kind: RecordKind) -> &'static [Column] {
        match kind {
            RecordKind::Standings => self.standings,
            RecordKind::Teams => self.teams,
            RecordKind::Players => self.players,
        }
    }

    pub fn column_names(&self, kind: RecordKind) -> Vec<&'static str> {
        self.columns(kind).iter().map(|c| c.name).collect()
    }

    pub fn standings_table(&self) -> String {
        format!("{}_standings", self.sport.as_str())
    }

    pub fn team_table(&self) -> String {
        format!("{}_team_stats", self.sport.as_str())
    }

    pub fn player_table(&self) -> String {
        format!("{}_player_stats", self.sport.as_str())
    }

    pub fn table(&self, kind: RecordKind) -> String {
        match kind {
            RecordKind::Standings => self.standings_table(),
            RecordKind::Teams => self.team_table(),
            RecordKind::Players => self.player_table(),
        }
    }

    /// Human readable label used in validation errors, e.g. `Ice Hockey Team Stats`.
    pub fn label(&self, kind: RecordKind) -> String {
        let sport = match self.sport {
            Sport::Football => "Football",
            Sport::Soccer => "Soccer",
            Sport::Basketball => "Basketball",
            Sport::IceHockey => "Ice Hockey",
            Sport::Volleyball => "Volleyball",
        };
        let kind = match kind {
            RecordKind::Standings => "Standings",
            RecordKind::Teams => "Team Stats",
            RecordKind::Players => "Player Stats",
        };
        format!("{sport} {kind}")
    }
}

/// Look up the column contract for a sport.
pub fn schema_for(sport: Sport) -> &'static SportSchema {
    match sport {
        Sport::Basketball => &basketball::SCHEMA,
        Sport::Football => &football::SCHEMA,
        Sport::IceHockey => &ice_hockey::SCHEMA,
        Sport::Soccer => &soccer::SCHEMA,
        Sport::Volleyball => &volleyball::SCHEMA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_sport_has_identity_columns() {
        for sport in Sport::ALL {
            let schema = schema_for(sport);
            assert_eq!(schema.sport, sport);
            for kind in [RecordKind::Standings, RecordKind::Teams] {
                let names = schema.column_names(kind);
                assert!(names.contains(&"team_name"), "{sport} {kind}");
                assert!(names.contains(&"conference"), "{sport} {kind}");
            }
            let players = schema.column_names(RecordKind::Players);
            for required in ["first_name", "lastname_initials", "school"] {
                assert!(players.contains(&required), "{sport} players missing {required}");
            }
        }
    }

    #[test]
    fn test_column_names_are_unique() {
        for sport in Sport::ALL {
            let schema = schema_for(sport);
            for kind in [RecordKind::Standings, RecordKind::Teams, RecordKind::Players] {
                let names = schema.column_names(kind);
                let unique: HashSet<_> = names.iter().collect();
                assert_eq!(unique.len(), names.len(), "{sport} {kind} has duplicates");
            }
        }
    }

    #[test]
    fn test_columns_do_not_shadow_scope_columns() {
        let reserved = ["id", "league", "season_option", "team_id", "regular_team_id"];
        for sport in Sport::ALL {
            let schema = schema_for(sport);
            for kind in [RecordKind::Standings, RecordKind::Teams, RecordKind::Players] {
                for name in schema.column_names(kind) {
                    assert!(!reserved.contains(&name), "{sport} {kind} reuses {name}");
                }
            }
        }
    }

    #[test]
    fn test_table_names() {
        let schema = schema_for(Sport::IceHockey);
        assert_eq!(schema.standings_table(), "ice_hockey_standings");
        assert_eq!(schema.table(RecordKind::Teams), "ice_hockey_team_stats");
        assert_eq!(schema.player_table(), "ice_hockey_player_stats");
        assert_eq!(schema.label(RecordKind::Teams), "Ice Hockey Team Stats");
    }

    #[test]
    fn test_player_rules() {
        assert_eq!(schema_for(Sport::Soccer).player_rules[0].column, "position");
        assert_eq!(schema_for(Sport::IceHockey).player_rules[0].column, "role");
        assert!(schema_for(Sport::Basketball).player_rules.is_empty());
    }

    #[test]
    fn test_leaderboards_index_player_columns() {
        for sport in Sport::ALL {
            let schema = schema_for(sport);
            assert!(!schema.leaderboards.is_empty(), "{sport} has no leaderboard");
            let players = schema.column_names(RecordKind::Players);
            for board in schema.leaderboards {
                for column in board.columns {
                    assert!(players.contains(column), "{sport} {} on {column}", board.name);
                }
            }
        }
    }
}
