/// Integration tests for daemon lifecycle behavior.
///
/// The startup-path tests (registry, tuning, uninitialized guards) run
/// anywhere. Tests that touch PostgreSQL are `#[ignore]`-gated and define
/// the expected storage behavior: upsert idempotence and per-break fan-out.
///
/// Database prerequisites:
/// - PostgreSQL running with the surfcast schema applied
/// - DATABASE_URL set in .env
///
/// Run the gated tests with:
///   cargo test --test daemon_lifecycle -- --ignored --test-threads=1

use chrono::NaiveDate;
use surfcast_service::daemon::Daemon;
use surfcast_service::db;
use surfcast_service::model::SlotForecast;
use surfcast_service::regions;
use surfcast_service::writer;

// ---------------------------------------------------------------------------
// Startup path (no external services)
// ---------------------------------------------------------------------------

#[test]
fn test_daemon_loads_region_registry_on_startup() {
    let names = regions::all_region_names();

    assert!(
        !names.is_empty(),
        "Region registry should contain configured surf regions"
    );
    assert!(
        names.contains(&"Wollongong"),
        "Registry should include the Wollongong region"
    );
}

#[test]
fn test_registry_lookup_drives_region_intersection() {
    // The daemon keeps only database regions that resolve in the registry.
    assert!(regions::find_region("Gold Coast").is_some());
    assert!(regions::find_region("Great Barrier Reef").is_none());
}

#[test]
fn test_daemon_guards_operations_before_initialization() {
    let mut daemon = Daemon::new();

    assert!(
        daemon.run_once().is_err(),
        "run_once should fail before initialize()"
    );
}

#[test]
fn test_database_url_format_is_validated_before_connecting() {
    let result = db::connect_with_validation("mysql://nope@localhost/surfcast");
    assert!(result.is_err(), "non-postgres URLs must be rejected up front");
}

// ---------------------------------------------------------------------------
// Storage behavior (database required)
// ---------------------------------------------------------------------------

fn setup_test_db() -> postgres::Client {
    db::connect_from_env().expect("Failed to connect to test database")
}

fn cleanup_test_data(client: &mut postgres::Client) {
    let _ = client.execute("DELETE FROM forecast_data WHERE break_id LIKE 'test-%'", &[]);
    let _ = client.execute("DELETE FROM surf_breaks WHERE id LIKE 'test-%'", &[]);
}

fn test_record(slot: &'static str, swell_height: f64) -> SlotForecast {
    SlotForecast {
        forecast_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        slot,
        swell_height_m: Some(swell_height),
        swell_direction_deg: Some(160.0),
        swell_period_s: Some(11.0),
        wind_speed_kn: Some(8.0),
        wind_direction_deg: Some(220.0),
        wind_gust_kn: None,
        tide_height_m: Some(1.2),
        tide_type: None,
        tide_trend: None,
    }
}

#[test]
#[ignore] // Only run when database is available
fn test_daemon_validates_database_tables_on_startup() {
    dotenv::dotenv().ok();
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let result = db::connect_and_verify(&db_url, &["surf_breaks", "forecast_data"]);
    assert!(
        result.is_ok(),
        "Daemon should verify all required tables exist: {:?}",
        result.err()
    );

    let missing = db::connect_and_verify(&db_url, &["nonexistent_table"]);
    assert!(missing.is_err(), "Missing tables must be detected and reported");
}

#[test]
#[ignore] // Only run when database is available
fn test_fan_out_writes_one_row_per_break_per_record() {
    let mut client = setup_test_db();
    cleanup_test_data(&mut client);

    client
        .execute(
            "INSERT INTO surf_breaks (id, name, region) VALUES
             ('test-b1', 'Test Left', 'Testland'),
             ('test-b2', 'Test Right', 'Testland')",
            &[],
        )
        .expect("test breaks should insert");

    let records = vec![test_record("6am", 1.0), test_record("8am", 1.5)];
    let summary = writer::write_forecasts(&mut client, "Testland", &records).expect("write ok");

    // 2 records × 2 breaks = 4 rows
    assert_eq!(summary.rows_written, 4);
    assert_eq!(summary.failures, 0);

    let count: i64 = client
        .query_one("SELECT COUNT(*) FROM forecast_data WHERE break_id LIKE 'test-%'", &[])
        .expect("count query")
        .get(0);
    assert_eq!(count, 4);

    cleanup_test_data(&mut client);
}

#[test]
#[ignore] // Only run when database is available
fn test_upsert_is_idempotent_per_composite_key() {
    let mut client = setup_test_db();
    cleanup_test_data(&mut client);

    client
        .execute(
            "INSERT INTO surf_breaks (id, name, region) VALUES ('test-b1', 'Test Left', 'Testland')",
            &[],
        )
        .expect("test break should insert");

    // Write twice with a changed value: one row per key, second value wins.
    let first = vec![test_record("6am", 1.0)];
    let second = vec![test_record("6am", 2.5)];
    writer::write_forecasts(&mut client, "Testland", &first).expect("first write");
    writer::write_forecasts(&mut client, "Testland", &second).expect("second write");

    let rows = client
        .query(
            "SELECT swell_height FROM forecast_data WHERE break_id = 'test-b1'
             AND forecast_date = '2024-05-01' AND forecast_time = '6am'",
            &[],
        )
        .expect("select");

    assert_eq!(rows.len(), 1, "second write must overwrite, not duplicate");
    let height: Option<f64> = rows[0].get(0);
    assert_eq!(height, Some(2.5));

    cleanup_test_data(&mut client);
}

#[test]
#[ignore] // Only run when database is available
fn test_fan_out_with_no_breaks_is_a_noop() {
    let mut client = setup_test_db();
    cleanup_test_data(&mut client);

    let records = vec![test_record("6am", 1.0)];
    let summary =
        writer::write_forecasts(&mut client, "Region With No Breaks", &records).expect("write ok");

    assert_eq!(summary.rows_written, 0);
    assert_eq!(summary.failures, 0);
}
