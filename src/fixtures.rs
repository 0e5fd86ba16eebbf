//! Record builders shared by unit tests.

use crate::{
    cli::types::Sport,
    records::{Record, RecordSet},
    schema::{schema_for, ColumnType, RecordKind},
};
use serde_json::{json, Value};

/// A record carrying every contracted column of `kind`, with `org` as its organization.
pub fn record(sport: Sport, kind: RecordKind, org: &str) -> Record {
    let schema = schema_for(sport);
    let mut record = Record::new();
    for column in schema.columns(kind) {
        let value = match column.ty {
            ColumnType::Integer => json!(3),
            ColumnType::Real => json!(1.5),
            ColumnType::Text => json!("Canada West"),
        };
        record.insert(column.name.to_string(), value);
    }
    for rule in schema.player_rules {
        if kind == RecordKind::Players {
            record.insert(rule.column.to_string(), json!(rule.allowed[0]));
        }
    }
    record.insert(kind.org_column().to_string(), json!(org));
    if kind == RecordKind::Players {
        record.insert("first_name".to_string(), json!("Sam"));
        record.insert("lastname_initials".to_string(), json!("T."));
    }
    record
}

pub fn team(sport: Sport, name: &str) -> Record {
    record(sport, RecordKind::Teams, name)
}

pub fn standing(sport: Sport, name: &str) -> Record {
    record(sport, RecordKind::Standings, name)
}

pub fn player(sport: Sport, first_name: &str, school: &str) -> Record {
    let mut record = record(sport, RecordKind::Players, school);
    record.insert("first_name".to_string(), Value::from(first_name));
    record
}

pub fn teams(sport: Sport, names: &[&str]) -> RecordSet {
    names.iter().map(|n| team(sport, n)).collect::<Vec<_>>().into()
}

pub fn standings(sport: Sport, names: &[&str]) -> RecordSet {
    names
        .iter()
        .map(|n| standing(sport, n))
        .collect::<Vec<_>>()
        .into()
}

/// Players given as (first name, school) pairs.
pub fn players(sport: Sport, rows: &[(&str, &str)]) -> RecordSet {
    rows.iter()
        .map(|(first, school)| player(sport, first, school))
        .collect::<Vec<_>>()
        .into()
}
