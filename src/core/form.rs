//! Workout form: shown on map click, hidden after a successful submit.
//!
//! Inputs are kept as raw strings, exactly as typed, and only parsed on
//! submit. Parsing follows the browser's unary plus: a blank field is 0,
//! anything unparsable is NaN.

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityType, Coordinates, Workout};
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

pub const INVALID_INPUT_MSG: &str = "Inputs have to be positive numbers!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Hidden,
    Visible { target: Coordinates },
}

/// Layout of the form element. `None` while collapsing after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Grid,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl FormInputs {
    fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }
}

/// Parsed form values, ready to become a workout once validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSubmission {
    pub activity: ActivityType,
    pub coordinates: Coordinates,
    pub distance: f64,
    pub duration: f64,
    /// Cadence for running, elevation gain for cycling.
    pub metric: f64,
}

impl FormSubmission {
    /// Check the submission before any record is built.
    ///
    /// Every number must be finite; distance and duration must be positive;
    /// cadence must be positive too. Elevation gain only has to be finite.
    pub fn validate(&self) -> AppResult<()> {
        let finite = [self.distance, self.duration, self.metric]
            .iter()
            .all(|v| v.is_finite());

        let positive = match self.activity {
            ActivityType::Running => [self.distance, self.duration, self.metric]
                .iter()
                .all(|v| *v > 0.0),
            ActivityType::Cycling => self.distance > 0.0 && self.duration > 0.0,
        };

        if finite && positive {
            Ok(())
        } else {
            Err(AppError::InvalidInput(INVALID_INPUT_MSG.to_string()))
        }
    }

    pub fn into_workout(self, created_at: DateTime<Local>) -> Workout {
        match self.activity {
            ActivityType::Running => Workout::running_at(
                created_at,
                self.coordinates,
                self.distance,
                self.duration,
                self.metric,
            ),
            ActivityType::Cycling => Workout::cycling_at(
                created_at,
                self.coordinates,
                self.distance,
                self.duration,
                self.metric,
            ),
        }
    }
}

/// Browser unary plus on an input value.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    pub inputs: FormInputs,
    activity: ActivityType,
    cadence_row_hidden: bool,
    elevation_row_hidden: bool,
    focused: Option<Field>,
    display: Display,
    restore_at: Option<Instant>,
    restore_delay: Duration,
}

impl FormController {
    pub fn new(restore_delay: Duration) -> Self {
        Self {
            state: FormState::Hidden,
            inputs: FormInputs::default(),
            activity: ActivityType::Running,
            cadence_row_hidden: false,
            elevation_row_hidden: true,
            focused: None,
            display: Display::Grid,
            restore_at: None,
            restore_delay,
        }
    }

    /// hidden → visible on a map click.
    ///
    /// A layout restore still pending from the last submit is applied now
    /// instead of firing later over the open form.
    pub fn show(&mut self, target: Coordinates) {
        self.state = FormState::Visible { target };
        self.restore_at = None;
        self.display = Display::Grid;
        self.inputs.distance.clear();
        self.focused = Some(Field::Distance);
    }

    /// visible → hidden after a successful submit.
    pub fn hide(&mut self, now: Instant) {
        self.inputs.clear();
        self.state = FormState::Hidden;
        self.focused = None;
        self.display = Display::None;
        self.restore_at = Some(now + self.restore_delay);
    }

    /// Apply the delayed layout restore once its deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.restore_at
            && now >= deadline
        {
            self.display = Display::Grid;
            self.restore_at = None;
        }
    }

    /// Dropdown change: swap the cadence and elevation rows.
    pub fn select_type(&mut self, activity: ActivityType) {
        if activity != self.activity {
            self.activity = activity;
            self.toggle_elevation_field();
        }
    }

    pub fn toggle_elevation_field(&mut self) {
        self.elevation_row_hidden = !self.elevation_row_hidden;
        self.cadence_row_hidden = !self.cadence_row_hidden;
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Distance => &mut self.inputs.distance,
            Field::Duration => &mut self.inputs.duration,
            Field::Cadence => &mut self.inputs.cadence,
            Field::Elevation => &mut self.inputs.elevation,
        };
        *slot = value.to_string();
    }

    /// Parse the current inputs. Fails when the form is not open.
    pub fn read(&self) -> AppResult<FormSubmission> {
        let FormState::Visible { target } = self.state else {
            return Err(AppError::FormHidden);
        };

        let metric = match self.activity {
            ActivityType::Running => parse_number(&self.inputs.cadence),
            ActivityType::Cycling => parse_number(&self.inputs.elevation),
        };

        Ok(FormSubmission {
            activity: self.activity,
            coordinates: target,
            distance: parse_number(&self.inputs.distance),
            duration: parse_number(&self.inputs.duration),
            metric,
        })
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, FormState::Visible { .. })
    }

    pub fn activity(&self) -> ActivityType {
        self.activity
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn cadence_row_hidden(&self) -> bool {
        self.cadence_row_hidden
    }

    pub fn elevation_row_hidden(&self) -> bool {
        self.elevation_row_hidden
    }

    pub fn restore_pending(&self) -> bool {
        self.restore_at.is_some()
    }
}
