use crate::errors::{AppError, AppResult};
use crate::models::Coordinates;

/// Source of the user's current position.
pub trait Geolocator {
    fn current_position(&mut self) -> AppResult<Coordinates>;
}

/// Position given on the command line (`--at`) or in the config file.
/// `None` behaves like a denied permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(pub Option<Coordinates>);

impl Geolocator for FixedPosition {
    fn current_position(&mut self) -> AppResult<Coordinates> {
        match self.0 {
            Some(c) if c.is_valid() => Ok(c),
            Some(c) => Err(AppError::Geolocation(format!("invalid position {c}"))),
            None => Err(AppError::Geolocation(
                "no position given (use --at LAT,LNG or set home_position)".into(),
            )),
        }
    }
}
