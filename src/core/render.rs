//! Turns a workout into a list entry (HTML fragment or table row) and a
//! popup text. Everything branches on the stored type tag and reads the
//! stored metrics; nothing is recomputed.

use crate::models::{Metrics, Workout};
use crate::utils::table::{Column, Table};

pub fn popup_content(w: &Workout) -> String {
    format!("{} {}", w.activity().emoji(), w.description)
}

fn detail(icon: &str, value: &str, unit: &str) -> String {
    format!(
        r#"
  <div class="workout__details">
    <span class="workout__icon">{icon}</span>
    <span class="workout__value">{value}</span>
    <span class="workout__unit">{unit}</span>
  </div>"#
    )
}

/// `<li>` entry for the workout list.
pub fn render_workout_html(w: &Workout) -> String {
    let activity = w.activity();
    let mut html = format!(
        r#"<li class="workout workout--{tag}" data-id="{id}">
  <h2 class="workout__title">{title}</h2>"#,
        tag = activity.as_str(),
        id = w.id,
        title = w.description,
    );

    html.push_str(&detail(activity.emoji(), &w.distance.to_string(), "km"));
    html.push_str(&detail("⏱", &w.duration.to_string(), "min"));

    match w.metrics {
        Metrics::Running { cadence, pace } => {
            html.push_str(&detail("⚡️", &format!("{pace:.1}"), "min/km"));
            html.push_str(&detail("🦶🏼", &cadence.to_string(), "spm"));
        }
        Metrics::Cycling {
            elevation_gain,
            speed,
        } => {
            html.push_str(&detail("⚡️", &format!("{speed:.1}"), "km/h"));
            html.push_str(&detail("⛰", &elevation_gain.to_string(), "m"));
        }
    }

    html.push_str("\n</li>");
    html
}

/// The rendered list next to the form. New entries go right after the
/// form, so the newest workout is always first.
#[derive(Debug, Clone, Default)]
pub struct WorkoutList {
    items: Vec<String>,
}

impl WorkoutList {
    pub fn insert_after_form(&mut self, html: String) {
        self.items.insert(0, html);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn to_html(&self) -> String {
        format!("<ul class=\"workouts\">\n{}\n</ul>", self.items.join("\n"))
    }
}

/// Terminal table of workouts, newest first like the list.
pub fn workouts_table(workouts: &[Workout]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 10),
        Column::new("", 2),
        Column::new("WORKOUT", 22),
        Column::new("KM", 6),
        Column::new("MIN", 6),
        Column::new("PACE/SPEED", 13),
        Column::new("CAD/ELEV", 9),
        Column::new("LAT, LNG", 20),
    ]);

    for w in workouts.iter().rev() {
        table.add_row(render_workout_row(w));
    }
    table
}

pub fn render_workout_row(w: &Workout) -> Vec<String> {
    let (metric, extra) = match w.metrics {
        Metrics::Running { cadence, pace } => (format!("{pace:.1} min/km"), format!("{cadence} spm")),
        Metrics::Cycling {
            elevation_gain,
            speed,
        } => (format!("{speed:.1} km/h"), format!("{elevation_gain} m")),
    };

    vec![
        w.id.clone(),
        w.activity().emoji().to_string(),
        w.description.clone(),
        w.distance.to_string(),
        w.duration.to_string(),
        metric,
        extra,
        w.coordinates.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use chrono::{Local, TimeZone};

    fn run() -> Workout {
        let t = Local.with_ymd_and_hms(2025, 9, 3, 6, 45, 0).unwrap();
        Workout::running_at(t, Coordinates::new(10.0, 20.0), 5.2, 24.0, 178.0)
    }

    fn ride() -> Workout {
        let t = Local.with_ymd_and_hms(2025, 9, 4, 18, 0, 0).unwrap();
        Workout::cycling_at(t, Coordinates::new(10.0, 20.0), 27.0, 95.0, 523.0)
    }

    #[test]
    fn running_entry_shows_pace_and_cadence() {
        let w = run();
        let html = render_workout_html(&w);

        assert!(html.starts_with(&format!(
            r#"<li class="workout workout--running" data-id="{}">"#,
            w.id
        )));
        assert!(html.contains("Running on September 3"));
        assert!(html.contains(">5.2<"));
        assert!(html.contains(">24<"));
        assert!(html.contains(">4.6<")); // 24 / 5.2
        assert!(html.contains("min/km"));
        assert!(html.contains(">178<"));
        assert!(html.contains("spm"));
        assert!(!html.contains("km/h"));
    }

    #[test]
    fn cycling_entry_shows_speed_and_elevation() {
        let html = render_workout_html(&ride());
        assert!(html.contains("workout--cycling"));
        assert!(html.contains(">17.1<")); // 27 / (95 / 60)
        assert!(html.contains("km/h"));
        assert!(html.contains(">523<"));
        assert!(!html.contains("spm"));
    }

    #[test]
    fn renders_from_stored_fields_only() {
        let mut w = run();
        // a reloaded record keeps whatever pace was stored
        w.metrics = Metrics::Running {
            cadence: 178.0,
            pace: 9.99,
        };
        assert!(render_workout_html(&w).contains(">10.0<"));
    }

    #[test]
    fn newest_entry_is_first() {
        let mut list = WorkoutList::default();
        list.insert_after_form(render_workout_html(&run()));
        list.insert_after_form(render_workout_html(&ride()));

        assert_eq!(list.len(), 2);
        assert!(list.items()[0].contains("workout--cycling"));
        assert!(list.to_html().starts_with("<ul class=\"workouts\">"));
    }

    #[test]
    fn popup_has_emoji_and_description() {
        assert_eq!(popup_content(&run()), "🏃‍♂️ Running on September 3");
    }

    #[test]
    fn table_lists_newest_first() {
        let out = workouts_table(&[run(), ride()]).render();
        let ride_at = out.find("Cycling on").unwrap();
        let run_at = out.find("Running on").unwrap();
        assert!(ride_at < run_at);
    }
}
