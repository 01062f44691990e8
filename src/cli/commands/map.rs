use crate::cli::commands::open_app;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Handle the `map` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let app = open_app(cfg, false)?;

    header("Map");
    for line in app.map().describe() {
        println!("{}", line);
    }
    Ok(())
}
