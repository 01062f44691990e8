#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworkoutlog::db::store::SqliteStore;
use rworkoutlog::models::Workout;
use rworkoutlog::storage;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HOME: &str = "45.4642,9.19";

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworkoutlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkoutlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add one running and one cycling workout
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rwl()
        .args([
            "--db", db_path, "--test", "--at", HOME, "add", "--click", "10,20", "--type",
            "running", "--distance", "5", "--duration", "30", "--cadence", "180",
        ])
        .assert()
        .success();

    rwl()
        .args([
            "--db", db_path, "--test", "--at", HOME, "add", "--click", "11,21", "--type",
            "cycling", "--distance", "20", "--duration", "60", "--elevation", "100",
        ])
        .assert()
        .success();
}

/// Stored workouts, read straight from the database
pub fn stored_workouts(db_path: &str) -> Vec<Workout> {
    let store = SqliteStore::open(db_path).expect("open store");
    storage::load(&store).expect("load").unwrap_or_default()
}
