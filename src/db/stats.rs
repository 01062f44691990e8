use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::ActivityType;
use crate::storage::{self, WORKOUTS_KEY};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::mins2readable;
use std::fs;

/// Aggregates printed by `db --info`.
#[derive(Debug, Default, PartialEq)]
pub struct WorkoutTotals {
    pub count: usize,
    pub running: usize,
    pub cycling: usize,
    pub distance_km: f64,
    pub duration_min: f64,
}

pub fn totals(store: &SqliteStore) -> AppResult<WorkoutTotals> {
    let workouts = storage::load(store)?.unwrap_or_default();

    let mut t = WorkoutTotals {
        count: workouts.len(),
        ..Default::default()
    };

    for w in &workouts {
        match w.activity() {
            ActivityType::Running => t.running += 1,
            ActivityType::Cycling => t.cycling += 1,
        }
        t.distance_km += w.distance;
        t.duration_min += w.duration;
    }

    Ok(t)
}

pub fn print_db_info(store: &SqliteStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) WORKOUTS
    //
    let t = totals(store)?;
    println!(
        "{}• Workouts:{} {}{}{} ({} running, {} cycling)",
        CYAN, RESET, GREEN, t.count, RESET, t.running, t.cycling
    );
    println!("{}• Total distance:{} {:.1} km", CYAN, RESET, t.distance_km);
    println!(
        "{}• Total duration:{} {}",
        CYAN,
        RESET,
        mins2readable(t.duration_min)
    );

    //
    // 3) LAST WRITE
    //
    let last = store
        .updated_at(WORKOUTS_KEY)?
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last saved:{} {}", CYAN, RESET, last);

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check`; returns the lines SQLite reports.
pub fn integrity_check(store: &SqliteStore) -> AppResult<Vec<String>> {
    let mut stmt = store.pool.conn.prepare("PRAGMA integrity_check")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn vacuum(store: &SqliteStore) -> AppResult<()> {
    store.pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::models::{Coordinates, Workout};

    #[test]
    fn totals_split_by_activity() {
        let mut store = SqliteStore::from_pool(DbPool::in_memory().unwrap()).unwrap();
        let c = Coordinates::new(0.0, 0.0);
        storage::save(
            &mut store,
            &[
                Workout::running(c, 5.0, 30.0, 180.0),
                Workout::cycling(c, 20.0, 60.0, 100.0),
                Workout::cycling(c, 15.5, 45.0, 10.0),
            ],
        )
        .unwrap();

        let t = totals(&store).unwrap();
        assert_eq!(t.count, 3);
        assert_eq!(t.running, 1);
        assert_eq!(t.cycling, 2);
        assert_eq!(t.distance_km, 40.5);
        assert_eq!(t.duration_min, 135.0);
    }

    #[test]
    fn fresh_database_is_healthy() {
        let store = SqliteStore::from_pool(DbPool::in_memory().unwrap()).unwrap();
        assert_eq!(integrity_check(&store).unwrap(), vec!["ok".to_string()]);
        assert_eq!(totals(&store).unwrap(), WorkoutTotals::default());
    }
}
