use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{HOME, init_db, init_db_with_data, rwl, setup_test_db, stored_workouts};

#[test]
fn test_list_empty() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No workouts yet"));
}

#[test]
fn test_list_shows_table_without_position() {
    let db_path = setup_test_db("list_no_position");
    init_db_with_data(&db_path);

    // the list renders even when the map cannot load
    rwl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Workouts (2)"))
        .stdout(contains("6.0 min/km").and(contains("20.0 km/h")))
        .stderr(contains("Could not get your position!"));
}

#[test]
fn test_list_html_newest_first() {
    let db_path = setup_test_db("list_html");
    init_db_with_data(&db_path);

    let out = rwl()
        .args(["--db", &db_path, "--test", "--at", HOME, "list", "--html"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8_lossy(&out);

    let cycling = out.find("workout--cycling").expect("cycling entry");
    let running = out.find("workout--running").expect("running entry");
    assert!(cycling < running);

    for w in stored_workouts(&db_path) {
        assert!(out.contains(&format!("data-id=\"{}\"", w.id)));
    }
}

#[test]
fn test_map_replays_markers() {
    let db_path = setup_test_db("map_markers");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "--at", HOME, "map"])
        .assert()
        .success()
        .stdout(contains("Markers: 2"))
        .stdout(contains("zoom 13"))
        .stdout(contains("running-popup").and(contains("cycling-popup")));
}

#[test]
fn test_map_without_position() {
    let db_path = setup_test_db("map_no_position");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "map"])
        .assert()
        .success()
        .stdout(contains("Map not loaded"));
}

#[test]
fn test_show_recenters_on_workout() {
    let db_path = setup_test_db("show_recenter");
    init_db_with_data(&db_path);

    let id = stored_workouts(&db_path)[0].id.clone();

    rwl()
        .args(["--db", &db_path, "--test", "--at", HOME, "show", &id])
        .assert()
        .success()
        .stdout(contains("Center: 10.00000, 20.00000"))
        .stdout(contains("Panned in 1.0s"));
}

#[test]
fn test_show_unknown_id() {
    let db_path = setup_test_db("show_unknown");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "--at", HOME, "show", "0000000000"])
        .assert()
        .failure()
        .stderr(contains("No workout with id 0000000000"));
}
