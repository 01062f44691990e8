use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Activity selected in the workout form dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Running,
    Cycling,
}

impl ActivityType {
    /// Convert string → enum (case insensitive)
    pub fn at_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" | "run" | "r" => Some(Self::Running),
            "cycling" | "cycle" | "c" => Some(Self::Cycling),
            _ => None,
        }
    }

    /// Convert enum → stored `type` tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "running",
            ActivityType::Cycling => "cycling",
        }
    }

    pub fn capitalized(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Cycling => "Cycling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ActivityType::Running => "🏃‍♂️",
            ActivityType::Cycling => "🚴‍♀️",
        }
    }

    /// CSS class used for the marker popup.
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::at_from_str(s).ok_or_else(|| AppError::InvalidActivity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_loose_names() {
        assert_eq!(ActivityType::at_from_str("Running"), Some(ActivityType::Running));
        assert_eq!(ActivityType::at_from_str(" c "), Some(ActivityType::Cycling));
        assert_eq!(ActivityType::at_from_str("swimming"), None);
        assert!("swimming".parse::<ActivityType>().is_err());
    }

    #[test]
    fn popup_class_follows_tag() {
        assert_eq!(ActivityType::Running.popup_class(), "running-popup");
        assert_eq!(ActivityType::Cycling.popup_class(), "cycling-popup");
    }
}
