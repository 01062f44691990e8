// src/export/html.rs

use crate::config::Config;
use crate::core::render::{WorkoutList, popup_content, render_workout_html};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::Workout;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct MarkerData<'a> {
    id: &'a str,
    coords: [f64; 2],
    popup: String,
    class_name: String,
}

/// Standalone page: the workout list plus a Leaflet map with one open
/// popup per workout. Clicking a list entry pans the map to it.
pub(crate) fn build_page(workouts: &[Workout], cfg: &Config) -> AppResult<String> {
    let mut list = WorkoutList::default();
    for w in workouts {
        list.insert_after_form(render_workout_html(w));
    }

    let markers: Vec<MarkerData> = workouts
        .iter()
        .map(|w| MarkerData {
            id: &w.id,
            coords: w.coordinates.into(),
            popup: popup_content(w),
            class_name: w.activity().popup_class(),
        })
        .collect();

    // keep "</script>" out of the inline JSON
    let markers_json = serde_json::to_string(&markers)?.replace("</", "<\\/");
    let tiles_json = serde_json::to_string(&cfg.tile_url)?;
    let attribution_json = serde_json::to_string(&cfg.tile_attribution)?;

    let center: [f64; 2] = workouts
        .last()
        .map(|w| w.coordinates)
        .or(cfg.home_position)
        .map(Into::into)
        .unwrap_or([0.0, 0.0]);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<title>rWorkoutlog</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
body {{ display: flex; margin: 0; height: 100vh; font-family: sans-serif; }}
.sidebar {{ width: 30rem; overflow-y: auto; padding: 1rem; background: #2d3439; color: #ececec; }}
.workouts {{ list-style: none; padding: 0; }}
.workout {{ background: #42484d; border-radius: 5px; padding: 1rem; margin-bottom: 1rem; cursor: pointer; }}
.workout--running {{ border-left: 5px solid #00c46a; }}
.workout--cycling {{ border-left: 5px solid #ffb545; }}
.workout__details {{ display: inline-block; margin-right: 1rem; }}
#map {{ flex: 1; }}
.running-popup .leaflet-popup-content-wrapper {{ border-left: 5px solid #00c46a; }}
.cycling-popup .leaflet-popup-content-wrapper {{ border-left: 5px solid #ffb545; }}
</style>
</head>
<body>
<div class="sidebar">
{list}
</div>
<div id="map"></div>
<script>
const workouts = {markers};
const map = L.map('map').setView([{lat}, {lng}], {zoom});
L.tileLayer({tiles}, {{ attribution: {attribution} }}).addTo(map);
workouts.forEach(w => {{
  L.marker(w.coords).addTo(map)
    .bindPopup(L.popup({{ maxWidth: 250, minWidth: 100, autoClose: false, closeOnClick: false, className: w.class_name }}))
    .setPopupContent(w.popup)
    .openPopup();
}});
document.querySelector('.workouts').addEventListener('click', e => {{
  const el = e.target.closest('.workout');
  if (!el) return;
  const w = workouts.find(w => w.id === el.dataset.id);
  if (w) map.setView(w.coords, {zoom}, {{ animate: true, pan: {{ duration: 1 }} }});
}});
</script>
</body>
</html>
"#,
        list = list.to_html(),
        markers = markers_json,
        lat = center[0],
        lng = center[1],
        zoom = cfg.map_zoom_level,
        tiles = tiles_json,
        attribution = attribution_json,
    ))
}

pub(crate) fn export_html(workouts: &[Workout], cfg: &Config, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));
    fs::write(path, build_page(workouts, cfg)?)?;
    notify_export_success("HTML", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn page_contains_list_and_markers() {
        let cfg = Config::default();
        let w = Workout::running(Coordinates::new(10.0, 20.0), 5.0, 30.0, 180.0);
        let page = build_page(std::slice::from_ref(&w), &cfg).unwrap();

        assert!(page.contains(&format!("data-id=\"{}\"", w.id)));
        assert!(page.contains("\"class_name\":\"running-popup\""));
        assert!(page.contains("setView([10, 20], 13)"));
        assert!(page.contains("openstreetmap.fr"));
    }

    #[test]
    fn empty_page_centers_on_home() {
        let cfg = Config {
            home_position: Some(Coordinates::new(45.5, 9.25)),
            ..Config::default()
        };
        let page = build_page(&[], &cfg).unwrap();
        assert!(page.contains("setView([45.5, 9.25], 13)"));
        assert!(page.contains("const workouts = [];"));
    }
}
