//! Application orchestrator.
//!
//! Owns the workout list and wires the form, the map, the rendered list,
//! the store and the dialogs together. Every public method is one user
//! event (startup, map click, type change, submit, list click, reset).

use crate::config::Config;
use crate::core::form::{Field, FormController, INVALID_INPUT_MSG};
use crate::core::geolocation::Geolocator;
use crate::core::map::MapAdapter;
use crate::core::render::{WorkoutList, render_workout_html};
use crate::errors::{AppError, AppResult};
use crate::models::workout::id_from_timestamp;
use crate::models::{ActivityType, Coordinates, Workout};
use crate::storage::{self, KeyValueStore};
use crate::ui::dialogs::Dialogs;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

const ERROR_TITLE: &str = "ERROR!";
const NO_POSITION_MSG: &str = "Could not get your position!";
const RESET_TITLE: &str = "Are you sure?";
const RESET_TEXT: &str = "Once deleted, you will not be able to recover your workouts!";
const RESET_DECLINED_MSG: &str = "Your workout history is safe!";

#[derive(Debug, Clone, Copy)]
pub struct AppSettings {
    pub zoom: u8,
    pub restore_delay: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            zoom: 13,
            restore_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&Config> for AppSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            zoom: cfg.map_zoom_level,
            restore_delay: Duration::from_millis(cfg.form_restore_delay_ms),
        }
    }
}

pub struct App<S, M, D>
where
    S: KeyValueStore,
    M: MapAdapter,
    D: Dialogs,
{
    workouts: Vec<Workout>,
    form: FormController,
    list: WorkoutList,
    map: M,
    store: S,
    dialogs: D,
    geolocator: Box<dyn Geolocator>,
    settings: AppSettings,
}

impl<S, M, D> App<S, M, D>
where
    S: KeyValueStore,
    M: MapAdapter,
    D: Dialogs,
{
    pub fn new(
        store: S,
        map: M,
        dialogs: D,
        geolocator: Box<dyn Geolocator>,
        settings: AppSettings,
    ) -> Self {
        Self {
            workouts: Vec::new(),
            form: FormController::new(settings.restore_delay),
            list: WorkoutList::default(),
            map,
            store,
            dialogs,
            geolocator,
            settings,
        }
    }

    /// Startup: ask for the position, restore the stored workouts into the
    /// list, then load the map (which replays the markers) if a position
    /// was available. Without a position the list still renders.
    pub fn start(&mut self) -> AppResult<()> {
        let position = match self.geolocator.current_position() {
            Ok(p) => Some(p),
            Err(_) => {
                self.dialogs.alert(ERROR_TITLE, NO_POSITION_MSG);
                None
            }
        };

        self.restore()?;

        if let Some(center) = position {
            self.load_map(center)?;
        }

        Ok(())
    }

    fn load_map(&mut self, center: Coordinates) -> AppResult<()> {
        self.map.initialize(center, self.settings.zoom)?;
        for w in &self.workouts {
            self.map.place_marker(w)?;
        }
        Ok(())
    }

    fn restore(&mut self) -> AppResult<()> {
        let Some(data) = storage::load(&self.store)? else {
            return Ok(());
        };

        self.workouts = data;
        for w in &self.workouts {
            self.list.insert_after_form(render_workout_html(w));
        }
        Ok(())
    }

    /// Click on the map: open the form for that spot.
    pub fn map_click(&mut self, at: Coordinates) -> AppResult<()> {
        let target = self.map.click(at).ok_or(AppError::MapNotReady)?;
        self.form.show(target);
        Ok(())
    }

    /// Activity dropdown changed.
    pub fn select_type(&mut self, activity: ActivityType) {
        self.form.select_type(activity);
    }

    /// Type a value into one of the form inputs.
    pub fn fill(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
    }

    /// Form submit.
    ///
    /// On invalid input an alert is shown and nothing changes. Otherwise the
    /// workout is appended, drawn on the map, rendered into the list, the
    /// form is hidden and the whole list is saved.
    pub fn submit(&mut self, now: Instant) -> AppResult<Workout> {
        let submission = self.form.read()?;

        if let Err(e) = submission.validate() {
            self.dialogs.alert(ERROR_TITLE, INVALID_INPUT_MSG);
            return Err(e);
        }

        let workout = submission.into_workout(self.unique_timestamp(Local::now()));

        self.workouts.push(workout.clone());
        self.map.place_marker(&workout)?;
        self.list.insert_after_form(render_workout_html(&workout));
        self.form.hide(now);
        storage::save(&mut self.store, &self.workouts)?;

        Ok(workout)
    }

    /// Ids come from the creation millisecond; step forward until unused.
    fn unique_timestamp(&self, mut ts: DateTime<Local>) -> DateTime<Local> {
        while self.workouts.iter().any(|w| w.id == id_from_timestamp(&ts)) {
            ts += chrono::Duration::milliseconds(1);
        }
        ts
    }

    /// Click on a list entry: fly the map to that workout.
    /// Unknown ids are ignored.
    pub fn move_to_popup(&mut self, id: &str) -> AppResult<Option<&Workout>> {
        let Some(w) = self.workouts.iter().find(|w| w.id == id) else {
            return Ok(None);
        };

        self.map.recenter(w.coordinates, self.settings.zoom, true)?;
        Ok(Some(w))
    }

    /// Destructive reset, behind a confirmation. Returns whether data was
    /// deleted.
    pub fn reset(&mut self) -> AppResult<bool> {
        if !self.dialogs.confirm(RESET_TITLE, RESET_TEXT)? {
            self.dialogs.notify(RESET_DECLINED_MSG);
            return Ok(false);
        }

        storage::clear(&mut self.store)?;
        self.reload()?;
        Ok(true)
    }

    /// Start over from the store, as a fresh page load would.
    pub fn reload(&mut self) -> AppResult<()> {
        self.workouts.clear();
        self.list.clear();
        self.form = FormController::new(self.settings.restore_delay);
        self.map.teardown();
        self.start()
    }

    /// Let time-based UI work (the form layout restore) catch up.
    pub fn tick(&mut self, now: Instant) {
        self.form.poll(now);
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn list(&self) -> &WorkoutList {
        &self.list
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
