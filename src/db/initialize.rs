use crate::db::migrate::{applied_migrations, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Bring the database schema up to date.
///
/// Waits briefly on a locked file (two shells writing at once) and returns
/// how many migrations this call applied.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    conn.busy_timeout(Duration::from_secs(2))?;

    let before = applied_migrations(conn).map(|m| m.len()).unwrap_or(0);
    run_pending_migrations(conn)?;
    let after = applied_migrations(conn)?.len();

    Ok(after.saturating_sub(before))
}
