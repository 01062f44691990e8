pub mod app;
pub mod form;
pub mod geolocation;
pub mod log;
pub mod map;
pub mod render;

pub use app::{App, AppSettings};
