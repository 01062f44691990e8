use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (latitude, longitude) pair.
///
/// Persisted as a two element JSON array `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Parse `"LAT,LNG"` as typed on the command line.
impl FromStr for Coordinates {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinates(format!("expected LAT,LNG, got '{s}'")))?;

        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| AppError::InvalidCoordinates(format!("'{}' is not a number", v.trim())))
        };

        let coords = Coordinates::new(parse(lat)?, parse(lng)?);
        if !coords.is_valid() {
            return Err(AppError::InvalidCoordinates(format!(
                "{s} is outside the latitude/longitude range"
            )));
        }

        Ok(coords)
    }
}
