use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::workouts_table;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Handle the `list` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { html } = cmd {
        let app = open_app(cfg, false)?;

        if app.workouts().is_empty() {
            info("No workouts yet. Click the map to add one (rworkoutlog add).");
            return Ok(());
        }

        if *html {
            println!("{}", app.list().to_html());
            return Ok(());
        }

        header(format!("Workouts ({})", app.workouts().len()));
        print!("{}", workouts_table(app.workouts()).render());
    }

    Ok(())
}
