use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::Field;
use crate::db::log::wlog;
use crate::errors::AppResult;
use crate::models::Coordinates;
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_activity;
use std::time::Instant;

/// Handle the `add` command: map click, type select, fill, submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        click,
        activity,
        distance,
        duration,
        cadence,
        elevation,
    } = cmd
    {
        let at: Coordinates = click.parse()?;
        let mut app = open_app(cfg, false)?;

        app.map_click(at)?;
        app.select_type(*activity);
        app.fill(Field::Distance, distance);
        app.fill(Field::Duration, duration);
        if let Some(c) = cadence {
            app.fill(Field::Cadence, c);
        }
        if let Some(e) = elevation {
            app.fill(Field::Elevation, e);
        }

        let workout = app.submit(Instant::now())?;

        success(format!(
            "Saved {} [{}] at {}",
            colorize_activity(&workout.description, workout.activity()),
            workout.id,
            workout.coordinates
        ));

        if let Err(e) = wlog(
            &app.store().pool.conn,
            "add",
            &workout.id,
            &workout.description,
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
