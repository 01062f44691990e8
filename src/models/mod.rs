pub mod activity;
pub mod coords;
pub mod workout;

pub use activity::ActivityType;
pub use coords::Coordinates;
pub use workout::{Metrics, Workout};
