// src/export/model.rs

use crate::models::{Metrics, Workout};
use serde::Serialize;

/// Flat row for CSV export. Fields that do not apply to the activity stay
/// empty.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkoutExport {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub pace_min_km: Option<f64>,
    pub cadence_spm: Option<f64>,
    pub speed_km_h: Option<f64>,
    pub elevation_gain_m: Option<f64>,
    pub description: String,
}

impl From<&Workout> for WorkoutExport {
    fn from(w: &Workout) -> Self {
        let (pace, cadence, speed, elevation) = match w.metrics {
            Metrics::Running { cadence, pace } => (Some(pace), Some(cadence), None, None),
            Metrics::Cycling {
                elevation_gain,
                speed,
            } => (None, None, Some(speed), Some(elevation_gain)),
        };

        Self {
            id: w.id.clone(),
            kind: w.activity().as_str().to_string(),
            created_at: w.created_at.to_rfc3339(),
            lat: w.coordinates.lat,
            lng: w.coordinates.lng,
            distance_km: w.distance,
            duration_min: w.duration,
            pace_min_km: pace,
            cadence_spm: cadence,
            speed_km_h: speed,
            elevation_gain_m: elevation,
            description: w.description.clone(),
        }
    }
}
