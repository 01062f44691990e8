use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::wlog;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;

        if let Some(path) = ExportLogic::export(&store, cfg, *format, file, *force)?
            && let Err(e) = wlog(
                &store.pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("Exported workouts as {}", format.as_str()),
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
