//! Record builders shared by integration tests

#![allow(dead_code)]

use northscore_sync::{
    schema::{schema_for, ColumnType, RecordKind},
    Sport,
};
use serde_json::{json, Value};

/// A JSON object carrying every contracted column of `kind`, with `org` as its organization.
pub fn row(sport: Sport, kind: RecordKind, org: &str) -> Value {
    let schema = schema_for(sport);
    let mut object = serde_json::Map::new();
    for column in schema.columns(kind) {
        let value = match column.ty {
            ColumnType::Integer => json!(8),
            ColumnType::Real => json!(0.5),
            ColumnType::Text => json!("OUA"),
        };
        object.insert(column.name.to_string(), value);
    }
    if kind == RecordKind::Players {
        for rule in schema.player_rules {
            object.insert(rule.column.to_string(), json!(rule.allowed[0]));
        }
        object.insert("lastname_initials".to_string(), json!("R."));
    }
    object.insert(kind.org_column().to_string(), json!(org));
    Value::Object(object)
}

pub fn rows(sport: Sport, kind: RecordKind, orgs: &[&str]) -> Value {
    Value::Array(orgs.iter().map(|org| row(sport, kind, org)).collect())
}

/// Player rows given as (first name, school) pairs.
pub fn players(sport: Sport, entries: &[(&str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(first, school)| {
                let mut player = row(sport, RecordKind::Players, school);
                player["first_name"] = json!(first);
                player
            })
            .collect(),
    )
}
