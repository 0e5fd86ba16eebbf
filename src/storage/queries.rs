//! Read-back queries over synced tables

use super::{models::StoredPlayer, schema::Datastore};
use crate::{
    cli::types::{League, SeasonPhase, Sport},
    schema::{schema_for, RecordKind},
    Result,
};
use rusqlite::{params_from_iter, types::Value as SqlValue, Row};
use std::collections::BTreeMap;

impl Datastore {
    /// Count rows of one table in a league, optionally narrowed to a season phase.
    ///
    /// Standings have no phase column; `phase` is ignored for them.
    pub fn count_rows(
        &self,
        sport: Sport,
        kind: RecordKind,
        league: League,
        phase: Option<SeasonPhase>,
    ) -> Result<usize> {
        let table = schema_for(sport).table(kind);
        let (filter, args) = scope_filter(kind, league, phase);
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE {filter}"),
            params_from_iter(args),
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Team name to generated id for one league and phase.
    pub fn team_ids(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<BTreeMap<String, i64>> {
        let table = schema_for(sport).team_table();
        let mut stmt = self.conn.prepare(&format!(
            "SELECT team_name, id FROM {table} WHERE league = ?1 AND season_option = ?2"
        ))?;
        let rows = stmt.query_map([league.as_str(), phase.as_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut teams = BTreeMap::new();
        for row in rows {
            let (name, id) = row?;
            teams.insert(name, id);
        }
        Ok(teams)
    }

    /// Player rows of one league and phase, in insertion order.
    pub fn players(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<Vec<StoredPlayer>> {
        let table = schema_for(sport).player_table();
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, first_name, lastname_initials, school, team_id, regular_team_id
             FROM {table}
             WHERE league = ?1 AND season_option = ?2
             ORDER BY id"
        ))?;

        let rows = stmt.query_map([league.as_str(), phase.as_str()], |row| {
            self.row_to_player(row)
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Player rows whose team reference does not point at a team of the same league and phase.
    pub fn orphaned_players(&self, sport: Sport) -> Result<usize> {
        let schema = schema_for(sport);
        let count: i64 = self.conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM {players} p
                 LEFT JOIN {teams} t
                   ON t.id = p.team_id
                  AND t.league = p.league
                  AND t.season_option = p.season_option
                 WHERE t.id IS NULL",
                players = schema.player_table(),
                teams = schema.team_table(),
            ),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Player rows whose `regular_team_id` names no regular-season team of their league.
    pub fn dangling_regular_refs(&self, sport: Sport) -> Result<usize> {
        let schema = schema_for(sport);
        let count: i64 = self.conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM {players} p
                 LEFT JOIN {teams} t
                   ON t.id = p.regular_team_id
                  AND t.league = p.league
                  AND t.season_option = 'regular'
                 WHERE p.regular_team_id IS NOT NULL AND t.id IS NULL",
                players = schema.player_table(),
                teams = schema.team_table(),
            ),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Contracted column values of every row in scope, in insertion order.
    ///
    /// Generated ids are left out so two generations of the same data compare equal.
    pub fn scoped_rows(
        &self,
        sport: Sport,
        kind: RecordKind,
        league: League,
        phase: Option<SeasonPhase>,
    ) -> Result<Vec<Vec<SqlValue>>> {
        let schema = schema_for(sport);
        let columns = schema.column_names(kind).join(", ");
        let (filter, args) = scope_filter(kind, league, phase);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {columns} FROM {table} WHERE {filter} ORDER BY id",
            table = schema.table(kind)
        ))?;
        let width = stmt.column_count();

        let rows = stmt.query_map(params_from_iter(args), |row| {
            (0..width)
                .map(|i| row.get::<_, SqlValue>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn row_to_player(&self, row: &Row) -> rusqlite::Result<StoredPlayer> {
        Ok(StoredPlayer {
            id: row.get(0)?,
            first_name: row.get(1)?,
            lastname_initials: row.get(2)?,
            school: row.get(3)?,
            team_id: row.get(4)?,
            regular_team_id: row.get(5)?,
        })
    }
}

fn scope_filter(
    kind: RecordKind,
    league: League,
    phase: Option<SeasonPhase>,
) -> (&'static str, Vec<String>) {
    match (kind, phase) {
        (RecordKind::Standings, _) | (_, None) => ("league = ?1", vec![league.to_string()]),
        (_, Some(phase)) => (
            "league = ?1 AND season_option = ?2",
            vec![league.to_string(), phase.to_string()],
        ),
    }
}
