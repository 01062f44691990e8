// src/export/logic.rs

use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::storage;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// High level export of the stored workout list.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored workout.
    ///
    /// - `format`: csv | json | html
    /// - `file`: absolute output path (`~/` is expanded)
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        store: &SqliteStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = resolve_output(file)?;
        ensure_writable(&path, force)?;

        let workouts = storage::load(store)?.unwrap_or_default();

        if workouts.is_empty() && format != ExportFormat::Html {
            warning("No workouts stored. Nothing to export.");
            return Ok(None);
        }

        match format {
            ExportFormat::Csv => export_csv(&workouts, &path)?,
            ExportFormat::Json => export_json(&workouts, &path)?,
            ExportFormat::Html => export_html(&workouts, cfg, &path)?,
        }

        Ok(Some(path))
    }
}
