use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, rwl, setup_test_db};

#[test]
fn test_init_records_migrations() {
    let db_path = setup_test_db("init_migrations");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_db_info_counts_workouts() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("(1 running, 1 cycling)"));
}

#[test]
fn test_db_check_and_vacuum() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}
