//! Atomic replace of one work unit's standings, team and player rows.

use super::{models::SyncSummary, resolve::TeamResolver, schema::Datastore};
use crate::{
    cli::types::{SeasonPhase, WorkUnit},
    records::{Record, UnitData},
    schema::{schema_for, Column, ColumnType},
    Result, SyncError,
};
use rusqlite::{params, params_from_iter, types::Value as SqlValue, Statement, Transaction};
use serde_json::Value;
use std::collections::HashMap;

impl Datastore {
    /// Replace every row of `unit`'s scope with `data` inside one transaction.
    ///
    /// Standings are touched only for the regular season. Teams are recreated before players
    /// so player rows can reference the freshly generated team ids. Player rows whose school
    /// resolves to no team are dropped and counted in `excluded_players`. Any failure rolls
    /// the whole unit back, leaving the previous generation of rows in place.
    pub fn sync_unit(&mut self, unit: &WorkUnit, data: &UnitData) -> Result<SyncSummary> {
        let schema = schema_for(unit.sport);
        let league = unit.league.as_str();
        let phase = unit.phase.as_str();
        let mut summary = SyncSummary::default();

        let tx = self.conn.transaction()?;

        if let Some(standings) = data.standings.as_ref().filter(|_| unit.phase.is_regular()) {
            let _span =
                tracing::info_span!("save_standings", league, records = standings.len()).entered();
            let table = schema.standings_table();
            tx.execute(&format!("DELETE FROM {table} WHERE league = ?1"), [league])?;

            let mut stmt = prepare_insert(&tx, &table, &["league"], schema.standings)?;
            for record in &standings.records {
                insert_row(&mut stmt, vec![text(league)], schema.standings, record)?;
            }
            summary.standings = standings.len();
        }

        let team_table = schema.team_table();
        {
            let _span =
                tracing::info_span!("save_team_stats", league, phase, records = data.teams.len())
                    .entered();
            tx.execute(
                &format!("DELETE FROM {team_table} WHERE league = ?1 AND season_option = ?2"),
                [league, phase],
            )?;

            let mut stmt =
                prepare_insert(&tx, &team_table, &["league", "season_option"], schema.teams)?;
            for record in &data.teams.records {
                insert_row(
                    &mut stmt,
                    vec![text(league), text(phase)],
                    schema.teams,
                    record,
                )?;
            }
            summary.teams = data.teams.len();
        }

        let player_table = schema.player_table();
        if unit.phase.is_regular() {
            let remapped = remap_regular_teams(&tx, &player_table, &team_table, league)?;
            tracing::debug!(%unit, remapped, "remapped regular team references");
        }

        // Read back generated identities, scoped to this call only.
        let current = team_identities(&tx, &team_table, league, phase)?;
        let regular = if unit.phase.is_regular() {
            None
        } else {
            Some(team_identities(
                &tx,
                &team_table,
                league,
                SeasonPhase::Regular.as_str(),
            )?)
        };
        let resolver = TeamResolver::new(current, regular);

        {
            let _span = tracing::info_span!(
                "save_player_stats",
                league,
                phase,
                records = data.players.len()
            )
            .entered();
            tx.execute(
                &format!("DELETE FROM {player_table} WHERE league = ?1 AND season_option = ?2"),
                [league, phase],
            )?;

            let mut stmt = prepare_insert(
                &tx,
                &player_table,
                &["league", "season_option", "team_id", "regular_team_id"],
                schema.players,
            )?;
            for record in &data.players.records {
                let school = record.get("school").and_then(Value::as_str).unwrap_or("");
                let Some(team) = resolver.resolve(school) else {
                    tracing::debug!(%unit, school, "dropping player with unresolved school");
                    summary.excluded_players += 1;
                    continue;
                };
                let scope = vec![
                    text(league),
                    text(phase),
                    SqlValue::Integer(team.team_id),
                    team.regular_team_id.map_or(SqlValue::Null, SqlValue::Integer),
                ];
                insert_row(&mut stmt, scope, schema.players, record)?;
                summary.players += 1;
            }
        }

        tx.commit()?;
        Ok(summary)
    }
}

fn prepare_insert<'a>(
    tx: &'a Transaction<'_>,
    table: &str,
    scope: &[&str],
    columns: &[Column],
) -> Result<Statement<'a>> {
    let names: Vec<&str> = scope
        .iter()
        .copied()
        .chain(columns.iter().map(|c| c.name))
        .collect();
    let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        names.join(", "),
        placeholders.join(", ")
    );
    Ok(tx.prepare(&sql)?)
}

fn insert_row(
    stmt: &mut Statement<'_>,
    mut values: Vec<SqlValue>,
    columns: &[Column],
    record: &Record,
) -> Result<()> {
    for column in columns {
        values.push(coerce(column, record.get(column.name))?);
    }
    stmt.execute(params_from_iter(values))
        .map_err(SyncError::from_write)?;
    Ok(())
}

/// Point other phases' `regular_team_id` at the regular-season rows just inserted.
///
/// Matching is case-insensitive on the player's school; players whose school has no
/// regular-season team get NULL.
fn remap_regular_teams(
    tx: &Transaction<'_>,
    player_table: &str,
    team_table: &str,
    league: &str,
) -> Result<usize> {
    let updated = tx.execute(
        &format!(
            "UPDATE {player_table}
             SET regular_team_id = (
                 SELECT t.id FROM {team_table} t
                 WHERE t.league = ?1
                   AND t.season_option = ?2
                   AND lower(trim(t.team_name)) = lower(trim({player_table}.school))
                 ORDER BY t.id
                 LIMIT 1
             )
             WHERE league = ?1 AND season_option <> ?2"
        ),
        params![league, SeasonPhase::Regular.as_str()],
    )?;
    Ok(updated)
}

fn team_identities(
    tx: &Transaction<'_>,
    table: &str,
    league: &str,
    phase: &str,
) -> Result<HashMap<String, i64>> {
    let mut stmt = tx.prepare(&format!(
        "SELECT team_name, id FROM {table} WHERE league = ?1 AND season_option = ?2"
    ))?;
    let rows = stmt.query_map(params![league, phase], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut map = HashMap::new();
    for row in rows {
        let (name, id) = row?;
        map.insert(name, id);
    }
    Ok(map)
}

/// Convert a raw JSON value to the column's storage class.
///
/// Missing values, nulls and blank strings become NULL; integral floats in integer
/// columns are narrowed.
pub(crate) fn coerce(column: &Column, value: Option<&Value>) -> Result<SqlValue> {
    let invalid = |v: &Value| SyncError::InvalidValue {
        column: column.name.to_string(),
        value: v.to_string(),
    };

    let value = match value {
        None | Some(Value::Null) => return Ok(SqlValue::Null),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(SqlValue::Null),
        Some(v) => v,
    };

    match (column.ty, value) {
        (ColumnType::Text, Value::String(s)) => Ok(SqlValue::Text(s.clone())),
        (ColumnType::Text, Value::Number(n)) => Ok(SqlValue::Text(n.to_string())),
        (ColumnType::Text, Value::Bool(b)) => Ok(SqlValue::Text(b.to_string())),
        (ColumnType::Text, other) => Ok(SqlValue::Text(other.to_string())),

        (ColumnType::Integer | ColumnType::Real, Value::Bool(b)) => {
            Ok(SqlValue::Integer(i64::from(*b)))
        }
        (ColumnType::Integer, Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(SqlValue::Integer(i)),
            (None, Some(f)) => Ok(narrow(f)),
            _ => Err(invalid(value)),
        },
        (ColumnType::Integer, Value::String(s)) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Ok(SqlValue::Integer(i))
            } else {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(narrow)
                    .ok_or_else(|| invalid(value))
            }
        }
        (ColumnType::Real, Value::Number(n)) => n
            .as_f64()
            .map(SqlValue::Real)
            .ok_or_else(|| invalid(value)),
        (ColumnType::Real, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(SqlValue::Real)
            .ok_or_else(|| invalid(value)),
        (ColumnType::Integer | ColumnType::Real, _) => Err(invalid(value)),
    }
}

fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}

fn narrow(f: f64) -> SqlValue {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        SqlValue::Integer(f as i64)
    } else {
        SqlValue::Real(f)
    }
}
