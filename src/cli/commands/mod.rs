pub mod add;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod map;
pub mod reset;
pub mod show;

use crate::config::Config;
use crate::core::geolocation::FixedPosition;
use crate::core::map::{MapView, TileLayer};
use crate::core::{App, AppSettings};
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::dialogs::TerminalDialogs;

/// The application as the terminal drives it.
pub type CliApp = App<SqliteStore, MapView, TerminalDialogs>;

/// Open the store and run the startup sequence. The position is whatever
/// `home_position` holds after the `--at` override.
pub fn open_app(cfg: &Config, assume_yes: bool) -> AppResult<CliApp> {
    let store = SqliteStore::open(&cfg.database)?;
    let map = MapView::new(TileLayer {
        url_template: cfg.tile_url.clone(),
        attribution: cfg.tile_attribution.clone(),
    });

    let mut app = App::new(
        store,
        map,
        TerminalDialogs::new(assume_yes),
        Box::new(FixedPosition(cfg.home_position)),
        AppSettings::from(cfg),
    );
    app.start()?;
    Ok(app)
}
