//! Batch runs over snapshot files and an on-disk datastore

mod common;

use northscore_sync::{
    batch::{run_batch, units_for_month},
    commands::fetch::fetch_snapshots,
    pipeline::Pipeline,
    records::RecordSet,
    schema::RecordKind,
    source::{snapshot::snapshot_file_name, HttpSource, SnapshotSource},
    storage::Datastore,
    League, Month, SeasonPhase, Sport, WorkUnit,
};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

fn record_set(value: serde_json::Value) -> RecordSet {
    serde_json::from_value(value).unwrap()
}

/// Snapshot files for every unit of `month`, each with Saskatchewan and Regina as teams.
fn seed_month(dir: &std::path::Path, month: Month) {
    let snapshots = SnapshotSource::new(dir);
    for unit in units_for_month(month, &[]) {
        let sport = unit.sport;
        if unit.phase.is_regular() {
            snapshots
                .write(
                    &unit,
                    RecordKind::Standings,
                    &record_set(common::rows(
                        sport,
                        RecordKind::Standings,
                        &["Saskatchewan", "Regina"],
                    )),
                )
                .unwrap();
        }
        snapshots
            .write(
                &unit,
                RecordKind::Teams,
                &record_set(common::rows(
                    sport,
                    RecordKind::Teams,
                    &["Saskatchewan", "Regina"],
                )),
            )
            .unwrap();
        snapshots
            .write(
                &unit,
                RecordKind::Players,
                &record_set(common::players(
                    sport,
                    &[("Mo", "Saskatchewan"), ("Jo", "Regina"), ("Al", "Manitoba")],
                )),
            )
            .unwrap();
    }
}

#[tokio::test]
async fn test_full_month_from_snapshots() {
    let snapshot_dir = TempDir::new().unwrap();
    let db_dir = TempDir::new().unwrap();
    let month = Month::new(11).unwrap();
    seed_month(snapshot_dir.path(), month);

    let pipeline = Pipeline::new(SnapshotSource::new(snapshot_dir.path()));
    let mut store = Datastore::open(&db_dir.path().join("northscore.db")).unwrap();

    let report = run_batch(&pipeline, &mut store, month, &[]).await.unwrap();

    assert_eq!(report.succeeded.len(), 15);
    assert!(report.is_clean());
    assert_eq!(report.excluded_players(), 15);
    for sport in Sport::ALL {
        assert_eq!(store.orphaned_players(sport).unwrap(), 0, "{sport}");
    }

    // Football championship players point back at their regular season team.
    let regular = store
        .team_ids(Sport::Football, League::Men, SeasonPhase::Regular)
        .unwrap();
    let championship = store
        .players(Sport::Football, League::Men, SeasonPhase::Championship)
        .unwrap();
    assert_eq!(championship.len(), 2);
    for player in championship {
        assert_eq!(player.regular_team_id, Some(regular[&player.school]));
    }
}

#[tokio::test]
async fn test_datastore_survives_reopen() {
    let snapshot_dir = TempDir::new().unwrap();
    let db_dir = TempDir::new().unwrap();
    let db_path = db_dir.path().join("northscore.db");
    let month = Month::new(1).unwrap();
    seed_month(snapshot_dir.path(), month);

    {
        let pipeline = Pipeline::new(SnapshotSource::new(snapshot_dir.path()));
        let mut store = Datastore::open(&db_path).unwrap();
        run_batch(&pipeline, &mut store, month, &[Sport::IceHockey])
            .await
            .unwrap();
    }

    let store = Datastore::open(&db_path).unwrap();
    assert_eq!(
        store
            .count_rows(
                Sport::IceHockey,
                RecordKind::Teams,
                League::Women,
                Some(SeasonPhase::Regular)
            )
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn test_fetch_then_sync() {
    let server = MockServer::start().await;
    let sport = Sport::Volleyball;
    Mock::given(method("GET"))
        .and(path_regex(r"^/volleyball/standings$"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::rows(
                sport,
                RecordKind::Standings,
                &["Dalhousie", "Acadia"],
            )),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/volleyball/teams$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::rows(
            sport,
            RecordKind::Teams,
            &["Dalhousie", "Acadia"],
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/volleyball/players$"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::players(sport, &[("Em", "Acadia")])),
        )
        .mount(&server)
        .await;

    let snapshot_dir = TempDir::new().unwrap();
    let snapshots = SnapshotSource::new(snapshot_dir.path());
    let http = HttpSource::new(server.uri()).unwrap();
    let units = units_for_month(Month::new(10).unwrap(), &[sport]);

    let fetched = fetch_snapshots(&http, &snapshots, &units).await;
    assert!(fetched.failed.is_empty());
    assert_eq!(fetched.written.len(), 6);

    let unit = WorkUnit::new(sport, League::Women, SeasonPhase::Regular);
    assert!(snapshot_dir
        .path()
        .join(snapshot_file_name(&unit, RecordKind::Players))
        .exists());

    let pipeline = Pipeline::new(snapshots);
    let mut store = Datastore::open_in_memory().unwrap();
    let report = run_batch(&pipeline, &mut store, Month::new(10).unwrap(), &[sport])
        .await
        .unwrap();
    assert_eq!(report.succeeded.len(), 2);
    assert_eq!(
        report.succeeded[1].summary.players, 1,
        "women's volleyball player synced"
    );
}

#[tokio::test]
async fn test_unreadable_standings_fail_unit_and_keep_previous_rows() {
    let snapshot_dir = TempDir::new().unwrap();
    let month = Month::new(1).unwrap();
    seed_month(snapshot_dir.path(), month);

    let pipeline = Pipeline::new(SnapshotSource::new(snapshot_dir.path()));
    let mut store = Datastore::open_in_memory().unwrap();
    run_batch(&pipeline, &mut store, month, &[Sport::Basketball])
        .await
        .unwrap();

    let unit = WorkUnit::new(Sport::Basketball, League::Men, SeasonPhase::Regular);
    std::fs::write(
        snapshot_dir
            .path()
            .join(snapshot_file_name(&unit, RecordKind::Standings)),
        [0xff, 0xfe, 0x00],
    )
    .unwrap();

    let report = run_batch(&pipeline, &mut store, month, &[Sport::Basketball])
        .await
        .unwrap();
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].unit, unit);
    assert_eq!(
        store
            .count_rows(Sport::Basketball, RecordKind::Standings, League::Men, None)
            .unwrap(),
        2
    );
}
