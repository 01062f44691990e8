use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{HOME, init_db, init_db_with_data, rwl, setup_test_db, stored_workouts};
use rworkoutlog::models::Metrics;

#[test]
fn test_add_running_computes_pace() {
    let db_path = setup_test_db("add_running");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "--test", "--at", HOME, "add", "--click", "10,20", "--type",
            "running", "--distance", "5", "--duration", "30", "--cadence", "180",
        ])
        .assert()
        .success()
        .stdout(contains("Running on"));

    let workouts = stored_workouts(&db_path);
    assert_eq!(workouts.len(), 1);

    let w = &workouts[0];
    assert_eq!(w.coordinates.lat, 10.0);
    assert_eq!(w.coordinates.lng, 20.0);
    assert!(w.description.starts_with("Running on "));
    match w.metrics {
        Metrics::Running { cadence, pace } => {
            assert_eq!(cadence, 180.0);
            assert_eq!(pace, 6.0);
        }
        _ => panic!("expected a running workout"),
    }
}

#[test]
fn test_add_cycling_computes_speed() {
    let db_path = setup_test_db("add_cycling");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "--test", "--at", HOME, "add", "--click", "10,20", "--type",
            "cycling", "--distance", "20", "--duration", "60", "--elevation", "100",
        ])
        .assert()
        .success()
        .stdout(contains("Cycling on"));

    let workouts = stored_workouts(&db_path);
    assert_eq!(workouts.len(), 1);
    match workouts[0].metrics {
        Metrics::Cycling {
            elevation_gain,
            speed,
        } => {
            assert_eq!(elevation_gain, 100.0);
            assert_eq!(speed, 20.0);
        }
        _ => panic!("expected a cycling workout"),
    }
}

#[test]
fn test_add_rejects_non_positive_input() {
    let db_path = setup_test_db("add_invalid");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "--test", "--at", HOME, "add", "--click", "10,20", "--type",
            "running", "--distance", "-5", "--duration", "30", "--cadence", "180",
        ])
        .assert()
        .failure()
        .stderr(contains("Inputs have to be positive numbers!"));

    assert!(stored_workouts(&db_path).is_empty());
}

#[test]
fn test_add_rejects_non_numeric_input() {
    let db_path = setup_test_db("add_nan");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "--test", "--at", HOME, "add", "--click", "10,20", "--type",
            "cycling", "--distance", "abc", "--duration", "30",
        ])
        .assert()
        .failure()
        .stderr(contains("Inputs have to be positive numbers!"));

    assert!(stored_workouts(&db_path).is_empty());
}

#[test]
fn test_cycling_accepts_negative_elevation() {
    let db_path = setup_test_db("add_negative_elevation");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "--test", "--at", HOME, "add", "--click", "10,20", "--type",
            "cycling", "--distance", "20", "--duration", "60", "--elevation", "-50",
        ])
        .assert()
        .success();

    assert_eq!(stored_workouts(&db_path).len(), 1);
}

#[test]
fn test_add_without_position_fails() {
    let db_path = setup_test_db("add_no_position");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "--test", "add", "--click", "10,20", "--type", "running",
            "--distance", "5", "--duration", "30", "--cadence", "180",
        ])
        .assert()
        .failure()
        .stderr(contains("Could not get your position!").and(contains("not initialized")));

    assert!(stored_workouts(&db_path).is_empty());
}

#[test]
fn test_add_keeps_existing_workouts() {
    let db_path = setup_test_db("add_appends");
    init_db_with_data(&db_path);

    let workouts = stored_workouts(&db_path);
    assert_eq!(workouts.len(), 2);
    assert_ne!(workouts[0].id, workouts[1].id);
    assert!(workouts[0].description.starts_with("Running"));
    assert!(workouts[1].description.starts_with("Cycling"));
}
