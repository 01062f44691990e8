use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const STORAGE_VERSION: &str = "20250601_0001_create_storage";
const STORAGE_INDEX_VERSION: &str = "20250601_0002_storage_updated_at_index";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the given table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the key/value `storage` table that holds the serialized workouts.
fn create_storage_table(conn: &Connection) -> Result<()> {
    if table_exists(conn, "storage")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE storage (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;

    if !is_applied(conn, STORAGE_VERSION)? {
        mark_applied(conn, STORAGE_VERSION, "Created storage table")?;
    }

    success("Created storage table.");
    Ok(())
}

fn migrate_storage_index(conn: &Connection) -> Result<()> {
    if is_applied(conn, STORAGE_INDEX_VERSION)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_storage_updated_at ON storage(updated_at);",
    )?;

    mark_applied(conn, STORAGE_INDEX_VERSION, "Indexed storage.updated_at")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_storage_table(conn)?;
    migrate_storage_index(conn)?;
    Ok(())
}

/// Names of the migrations recorded in the `log` table, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert!(table_exists(&conn, "storage").unwrap());
        assert_eq!(
            applied_migrations(&conn).unwrap(),
            vec![STORAGE_VERSION.to_string(), STORAGE_INDEX_VERSION.to_string()]
        );
    }
}
