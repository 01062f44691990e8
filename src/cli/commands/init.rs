use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::wlog;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rWorkoutlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let store = SqliteStore::open(&db_path)?;
    success(format!("Database initialized at {}", &db_path));

    if let Err(e) = wlog(
        &store.pool.conn,
        "init",
        &db_path,
        "Database initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rWorkoutlog initialization completed!");
    Ok(())
}
