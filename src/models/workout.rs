//! Workout records: shared fields plus a per-activity payload.
//!
//! A record is built once and never mutated. Everything the renderers need
//! (type tag, pace/speed, description) is stored, so a record loaded back
//! from storage renders exactly like the one that was saved.

use super::{activity::ActivityType, coords::Coordinates};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    #[serde(alias = "date")]
    pub created_at: DateTime<Local>,
    #[serde(alias = "coords")]
    pub coordinates: Coordinates,
    pub distance: f64, // km
    pub duration: f64, // min
    pub description: String,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Activity specific payload, keyed by the stored `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Metrics {
    Running {
        cadence: f64, // spm
        #[serde(deserialize_with = "nan_if_null")]
        pace: f64, // min/km
    },
    Cycling {
        #[serde(rename = "elevationGain", alias = "elevation")]
        elevation_gain: f64, // m
        #[serde(deserialize_with = "nan_if_null")]
        speed: f64, // km/h
    },
}

/// JSON has no NaN: serializers write `null`, so read it back as NaN.
fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// `"<Capitalized type> on <Month> <day>"`
pub fn describe(activity: ActivityType, date: NaiveDate) -> String {
    format!(
        "{} on {} {}",
        activity.capitalized(),
        MONTHS[date.month0() as usize],
        date.day()
    )
}

/// Id derived from the creation timestamp: its last 10 millisecond digits.
pub fn id_from_timestamp(created_at: &DateTime<Local>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(10);
    millis[start..].to_string()
}

impl Workout {
    /// Build a running record now. No validation: callers validate first.
    pub fn running(coordinates: Coordinates, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::running_at(Local::now(), coordinates, distance, duration, cadence)
    }

    /// Build a cycling record now. No validation: callers validate first.
    pub fn cycling(
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        Self::cycling_at(Local::now(), coordinates, distance, duration, elevation_gain)
    }

    pub fn running_at(
        created_at: DateTime<Local>,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Self {
        let pace = duration / distance;
        Self::finish(
            created_at,
            coordinates,
            distance,
            duration,
            Metrics::Running { cadence, pace },
        )
    }

    pub fn cycling_at(
        created_at: DateTime<Local>,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::finish(
            created_at,
            coordinates,
            distance,
            duration,
            Metrics::Cycling {
                elevation_gain,
                speed,
            },
        )
    }

    /// Description is set last, once the derived metric exists.
    fn finish(
        created_at: DateTime<Local>,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        metrics: Metrics,
    ) -> Self {
        let description = describe(metrics.activity(), created_at.date_naive());
        Self {
            id: id_from_timestamp(&created_at),
            created_at,
            coordinates,
            distance,
            duration,
            description,
            metrics,
        }
    }

    pub fn activity(&self) -> ActivityType {
        self.metrics.activity()
    }

    pub fn pace(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Running { pace, .. } => Some(pace),
            Metrics::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Cycling { speed, .. } => Some(speed),
            Metrics::Running { .. } => None,
        }
    }

    pub fn created_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl Metrics {
    pub fn activity(&self) -> ActivityType {
        match self {
            Metrics::Running { .. } => ActivityType::Running,
            Metrics::Cycling { .. } => ActivityType::Cycling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 10, 30, 0).unwrap()
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        let w = Workout::running_at(at(2025, 3, 7), Coordinates::new(10.0, 20.0), 5.0, 30.0, 180.0);
        assert_eq!(w.pace(), Some(6.0));
        assert_eq!(w.speed(), None);
        assert_eq!(w.description, "Running on March 7");
        assert_eq!(w.activity(), ActivityType::Running);
    }

    #[test]
    fn cycling_speed_is_km_per_hour() {
        let w = Workout::cycling_at(at(2025, 12, 31), Coordinates::new(1.0, 2.0), 20.0, 60.0, 100.0);
        assert_eq!(w.speed(), Some(20.0));
        assert_eq!(w.description, "Cycling on December 31");

        let w = Workout::cycling_at(at(2025, 1, 1), Coordinates::new(1.0, 2.0), 27.0, 45.0, -12.0);
        assert_eq!(w.speed(), Some(27.0 / (45.0 / 60.0)));
        assert_eq!(w.description, "Cycling on January 1");
    }

    #[test]
    fn zero_distance_is_not_guarded() {
        let w = Workout::running_at(at(2025, 6, 1), Coordinates::new(0.0, 0.0), 0.0, 30.0, 170.0);
        assert!(!w.pace().unwrap().is_finite());
    }

    #[test]
    fn id_uses_last_ten_millisecond_digits() {
        let ts = at(2025, 6, 1);
        let id = id_from_timestamp(&ts);
        assert_eq!(id.len(), 10);
        assert!(ts.timestamp_millis().to_string().ends_with(&id));
    }

    #[test]
    fn json_layout_has_type_tag_and_array_coordinates() {
        let w = Workout::cycling_at(at(2025, 4, 2), Coordinates::new(10.0, 20.0), 20.0, 60.0, 100.0);
        let v: serde_json::Value = serde_json::to_value(&w).unwrap();

        assert_eq!(v["type"], "cycling");
        assert_eq!(v["coordinates"], serde_json::json!([10.0, 20.0]));
        assert_eq!(v["elevationGain"], 100.0);
        assert_eq!(v["speed"], 20.0);
        assert!(v.get("createdAt").is_some());
        assert!(v.get("cadence").is_none());
    }

    #[test]
    fn nan_metric_survives_as_null() {
        let w = Workout::running_at(at(2025, 6, 1), Coordinates::new(0.0, 0.0), 0.0, 0.0, 170.0);
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"pace\":null"));

        let back: Workout = serde_json::from_str(&json).unwrap();
        assert!(back.pace().unwrap().is_nan());
    }

    #[test]
    fn loads_browser_field_names() {
        let raw = r#"{
            "date": "2025-05-20T08:15:00.000Z",
            "id": "7812345678",
            "coords": [51.5, -0.12],
            "distance": 12,
            "duration": 40,
            "type": "cycling",
            "elevation": 230,
            "speed": 18,
            "description": "Cycling on May 20"
        }"#;

        let w: Workout = serde_json::from_str(raw).unwrap();
        assert_eq!(w.id, "7812345678");
        assert_eq!(w.coordinates, Coordinates::new(51.5, -0.12));
        assert_eq!(
            w.metrics,
            Metrics::Cycling {
                elevation_gain: 230.0,
                speed: 18.0
            }
        );
    }
}
