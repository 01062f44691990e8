//! SQLite-backed key/value store: the durable home of the workout list.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::KeyValueStore;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path` and make sure the schema is current.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// When the given key was last written (RFC 3339), if ever.
    pub fn updated_at(&self, key: &str) -> AppResult<Option<String>> {
        let ts = self
            .pool
            .conn
            .query_row(
                "SELECT updated_at FROM storage WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(ts)
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM storage WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Workout};
    use crate::storage;

    fn store() -> SqliteStore {
        SqliteStore::from_pool(DbPool::in_memory().unwrap()).unwrap()
    }

    #[test]
    fn set_get_remove() {
        let mut s = store();
        assert_eq!(s.get_item("k").unwrap(), None);

        s.set_item("k", "one").unwrap();
        s.set_item("k", "two").unwrap();
        assert_eq!(s.get_item("k").unwrap().as_deref(), Some("two"));
        assert!(s.updated_at("k").unwrap().is_some());

        s.remove_item("k").unwrap();
        assert_eq!(s.get_item("k").unwrap(), None);
        assert_eq!(s.updated_at("k").unwrap(), None);
    }

    #[test]
    fn workouts_survive_in_sqlite() {
        let mut s = store();
        let list = vec![Workout::running(Coordinates::new(45.0, 9.0), 10.0, 50.0, 172.0)];
        storage::save(&mut s, &list).unwrap();

        let back = storage::load(&s).unwrap().unwrap();
        assert_eq!(back, list);
    }
}
