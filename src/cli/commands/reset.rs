use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::wlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `reset` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut app = open_app(cfg, *yes)?;
        let count = app.workouts().len();

        if !app.reset()? {
            return Ok(());
        }

        success(format!("Deleted {} workout(s).", count));

        if let Err(e) = wlog(
            &app.store().pool.conn,
            "reset",
            "workouts",
            &format!("Removed {} workout(s)", count),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
