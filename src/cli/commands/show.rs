use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `show` command: the list click that pans the map.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut app = open_app(cfg, false)?;

        let Some(w) = app.move_to_popup(id)? else {
            return Err(AppError::UnknownWorkout(id.clone()));
        };
        success(format!("Moved to {} ({})", w.description, w.created_str()));

        for line in app.map().describe() {
            println!("{}", line);
        }
    }

    Ok(())
}
