//! Map adapter: view center/zoom, tile layer, click handler and markers.

use crate::core::render::popup_content;
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, Workout};
use std::time::Duration;

pub const POPUP_MAX_WIDTH: u32 = 250;
pub const POPUP_MIN_WIDTH: u32 = 100;
pub const PAN_DURATION: Duration = Duration::from_secs(1);

pub trait MapAdapter {
    /// Create the view at `center`, attach the tile layer and start
    /// listening for clicks.
    fn initialize(&mut self, center: Coordinates, zoom: u8) -> AppResult<()>;

    /// Marker with an open popup for the workout.
    fn place_marker(&mut self, workout: &Workout) -> AppResult<()>;

    fn recenter(&mut self, coords: Coordinates, zoom: u8, animated: bool) -> AppResult<()>;

    fn is_ready(&self) -> bool;

    /// A click on the map. Yields the clicked position only when the click
    /// handler is registered.
    fn click(&self, at: Coordinates) -> Option<Coordinates>;

    /// Drop the view and every marker.
    fn teardown(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub workout_id: String,
    pub position: Coordinates,
    pub popup: PopupOptions,
    pub content: String,
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: Coordinates,
    pub zoom: u8,
    /// Pan animation of the last recenter, if any.
    pub pan: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct MapView {
    tile_layer: TileLayer,
    view: Option<ViewState>,
    attached_tiles: Option<TileLayer>,
    click_handler: bool,
    markers: Vec<Marker>,
}

impl MapView {
    pub fn new(tile_layer: TileLayer) -> Self {
        Self {
            tile_layer,
            view: None,
            attached_tiles: None,
            click_handler: false,
            markers: Vec::new(),
        }
    }

    pub fn view(&self) -> Option<ViewState> {
        self.view
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn tile_layer(&self) -> Option<&TileLayer> {
        self.attached_tiles.as_ref()
    }

    /// Human readable summary for the terminal.
    pub fn describe(&self) -> Vec<String> {
        let Some(view) = self.view else {
            return vec!["Map not loaded (no position available).".to_string()];
        };

        let mut lines = vec![format!("Center: {} (zoom {})", view.center, view.zoom)];
        if let Some(pan) = view.pan {
            lines.push(format!("Panned in {:.1}s", pan.as_secs_f64()));
        }
        if let Some(tiles) = &self.attached_tiles {
            lines.push(format!("Tiles:  {}", tiles.url_template));
        }
        lines.push(format!("Markers: {}", self.markers.len()));
        for m in &self.markers {
            lines.push(format!("  📍 [{}] {} ({})", m.position, m.content, m.popup.class_name));
        }
        lines
    }
}

impl MapAdapter for MapView {
    fn initialize(&mut self, center: Coordinates, zoom: u8) -> AppResult<()> {
        if !center.is_valid() {
            return Err(AppError::InvalidCoordinates(center.to_string()));
        }
        self.view = Some(ViewState {
            center,
            zoom,
            pan: None,
        });
        self.attached_tiles = Some(self.tile_layer.clone());
        self.click_handler = true;
        Ok(())
    }

    fn place_marker(&mut self, workout: &Workout) -> AppResult<()> {
        if !self.is_ready() {
            return Err(AppError::MapNotReady);
        }

        self.markers.push(Marker {
            workout_id: workout.id.clone(),
            position: workout.coordinates,
            popup: PopupOptions {
                max_width: POPUP_MAX_WIDTH,
                min_width: POPUP_MIN_WIDTH,
                auto_close: false,
                close_on_click: false,
                class_name: workout.activity().popup_class(),
            },
            content: popup_content(workout),
            open: true,
        });
        Ok(())
    }

    fn recenter(&mut self, coords: Coordinates, zoom: u8, animated: bool) -> AppResult<()> {
        let view = self.view.as_mut().ok_or(AppError::MapNotReady)?;
        view.center = coords;
        view.zoom = zoom;
        view.pan = animated.then_some(PAN_DURATION);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.view.is_some()
    }

    fn click(&self, at: Coordinates) -> Option<Coordinates> {
        (self.click_handler && at.is_valid()).then_some(at)
    }

    fn teardown(&mut self) {
        self.view = None;
        self.attached_tiles = None;
        self.click_handler = false;
        self.markers.clear();
    }
}
