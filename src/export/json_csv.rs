// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{WorkoutExport, notify_export_success};
use crate::models::Workout;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty JSON, same record layout as the stored list.
pub(crate) fn export_json(workouts: &[Workout], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(workouts)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row (derived by serde).
pub(crate) fn export_csv(workouts: &[Workout], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for w in workouts {
        wtr.serialize(WorkoutExport::from(w))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
