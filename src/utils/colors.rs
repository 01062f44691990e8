//! ANSI color helper utilities for terminal output.

use crate::models::ActivityType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Running → green, cycling → yellow (the popup border colors).
pub fn color_for_activity(activity: ActivityType) -> &'static str {
    match activity {
        ActivityType::Running => GREEN,
        ActivityType::Cycling => YELLOW,
    }
}

pub fn colorize_activity(text: &str, activity: ActivityType) -> String {
    format!("{}{}{}", color_for_activity(activity), text, RESET)
}
