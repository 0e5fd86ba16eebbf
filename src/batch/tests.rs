//! Unit tests for the batch driver

use super::*;
use crate::{
    cli::types::{League, SeasonPhase},
    fixtures,
    records::RecordSet,
    schema::RecordKind,
    season::resolve,
    SyncError,
};
use async_trait::async_trait;

/// Serves two teams per unit plus one player whose school fields no team.
#[derive(Default)]
struct ScriptedSource {
    failing: Option<Sport>,
    systemic: Option<Sport>,
}

impl ScriptedSource {
    fn check(&self, sport: Sport) -> crate::Result<()> {
        if self.systemic == Some(sport) {
            return Err(SyncError::Systemic {
                message: "database is gone".to_string(),
            });
        }
        if self.failing == Some(sport) {
            return Err(SyncError::Source {
                message: format!("no data for {sport}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn fetch_standings(
        &self,
        sport: Sport,
        _league: League,
    ) -> crate::Result<Option<RecordSet>> {
        Ok(Some(fixtures::standings(sport, &["UBC", "Laval"])))
    }

    async fn fetch_team_stats(
        &self,
        sport: Sport,
        _league: League,
        _phase: SeasonPhase,
    ) -> crate::Result<RecordSet> {
        self.check(sport)?;
        Ok(fixtures::teams(sport, &["UBC", "Laval"]))
    }

    async fn fetch_player_stats(
        &self,
        sport: Sport,
        _league: League,
        _phase: SeasonPhase,
    ) -> crate::Result<RecordSet> {
        Ok(fixtures::players(sport, &[("Ana", "UBC"), ("Lou", "Carleton")]))
    }
}

fn month(m: u32) -> Month {
    Month::new(m).unwrap()
}

#[test]
fn test_expand_units_football_men_only() {
    let units = expand_units(&resolve(9), &[]);
    let football: Vec<_> = units
        .iter()
        .filter(|u| u.sport == Sport::Football)
        .collect();
    assert_eq!(football.len(), 1);
    assert_eq!(football[0].league, League::Men);
    // Soccer runs both leagues.
    assert_eq!(units.len(), 3);
}

#[test]
fn test_expand_units_order() {
    let units = expand_units(&resolve(3), &[Sport::Basketball]);
    let expected: Vec<WorkUnit> = [League::Men, League::Women]
        .iter()
        .flat_map(|league| {
            [
                SeasonPhase::Regular,
                SeasonPhase::Playoffs,
                SeasonPhase::Championship,
            ]
            .map(|phase| WorkUnit::new(Sport::Basketball, *league, phase))
        })
        .collect();
    assert_eq!(units, expected);
}

#[test]
fn test_units_for_month_counts() {
    assert_eq!(units_for_month(month(7), &[]).len(), 0);
    assert_eq!(units_for_month(month(11), &[]).len(), 15);
    assert_eq!(units_for_month(month(3), &[]).len(), 18);
    // Filtering to an inactive sport yields nothing.
    assert!(units_for_month(month(1), &[Sport::Soccer]).is_empty());
}

#[tokio::test]
async fn test_off_season_batch_is_empty() {
    let pipeline = Pipeline::new(ScriptedSource::default());
    let mut store = Datastore::open_in_memory().unwrap();

    let report = run_batch(&pipeline, &mut store, month(6), &[])
        .await
        .unwrap();
    assert_eq!(report.total_units(), 0);
    assert!(report.is_clean());
}

#[tokio::test]
async fn test_batch_reports_every_unit() {
    let pipeline = Pipeline::new(ScriptedSource::default());
    let mut store = Datastore::open_in_memory().unwrap();

    let report = run_batch(&pipeline, &mut store, month(10), &[])
        .await
        .unwrap();
    // Football (m) + four two-league sports, regular season only.
    assert_eq!(report.succeeded.len(), 9);
    assert!(report.is_clean());
    assert_eq!(report.excluded_players(), 9);
    assert_eq!(
        store
            .count_rows(
                Sport::Volleyball,
                RecordKind::Teams,
                League::Women,
                Some(SeasonPhase::Regular)
            )
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn test_unit_failure_does_not_stop_batch() {
    let source = ScriptedSource {
        failing: Some(Sport::Soccer),
        ..Default::default()
    };
    let pipeline = Pipeline::new(source);
    let mut store = Datastore::open_in_memory().unwrap();

    let report = run_batch(&pipeline, &mut store, month(11), &[])
        .await
        .unwrap();
    assert_eq!(report.failed.len(), 6);
    assert_eq!(report.succeeded.len(), 9);
    assert!(report
        .failed
        .iter()
        .all(|f| f.unit.sport == Sport::Soccer && f.reason.contains("no data for soccer")));
    // Units after the failing sport still ran.
    assert!(report
        .succeeded
        .iter()
        .any(|s| s.unit.sport == Sport::Volleyball));
}

#[tokio::test]
async fn test_systemic_failure_aborts_batch() {
    let source = ScriptedSource {
        systemic: Some(Sport::Football),
        ..Default::default()
    };
    let pipeline = Pipeline::new(source);
    let mut store = Datastore::open_in_memory().unwrap();

    let err = run_batch(&pipeline, &mut store, month(9), &[])
        .await
        .unwrap_err();
    assert!(err.is_systemic());
    // Soccer comes after football and never ran.
    assert_eq!(
        store
            .count_rows(Sport::Soccer, RecordKind::Teams, League::Men, None)
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_read_only_datastore_aborts_batch() {
    let pipeline = Pipeline::new(ScriptedSource::default());
    let mut store = Datastore::open_in_memory().unwrap();
    store.conn.execute_batch("PRAGMA query_only = ON;").unwrap();

    let err = run_batch(&pipeline, &mut store, month(9), &[])
        .await
        .unwrap_err();
    assert!(err.is_systemic());
    match err {
        SyncError::Unit { unit, source } => {
            assert_eq!(unit, WorkUnit::new(Sport::Football, League::Men, SeasonPhase::Regular));
            match *source {
                SyncError::Database(e) => {
                    assert_eq!(e.sqlite_error_code(), Some(rusqlite::ErrorCode::ReadOnly));
                }
                other => panic!("Expected Database error, got {other:?}"),
            }
        }
        other => panic!("Expected Unit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_sport_filter() {
    let pipeline = Pipeline::new(ScriptedSource::default());
    let mut store = Datastore::open_in_memory().unwrap();

    let report = run_batch(&pipeline, &mut store, month(2), &[Sport::IceHockey])
        .await
        .unwrap();
    assert_eq!(report.succeeded.len(), 4);
    assert!(report
        .succeeded
        .iter()
        .all(|s| s.unit.sport == Sport::IceHockey));
}

#[test]
fn test_report_serializes() {
    let mut report = BatchReport::new(month(2));
    report.failed.push(UnitFailure {
        unit: WorkUnit::new(Sport::Basketball, League::Women, SeasonPhase::Playoffs),
        reason: "boom".to_string(),
    });

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["month"], 2);
    assert_eq!(value["failed"][0]["unit"]["league"], "w");
    assert_eq!(value["failed"][0]["unit"]["phase"], "playoffs");
}
