//! Pan-constrained park map viewport with nearest point-of-interest guidance.
//!
//! Everything here is plain computation with no UI dependency; the frontend
//! crate forwards DOM events into [`park::ParkView`] and renders what it
//! exposes.

pub mod calc;
pub mod catalog;
pub mod config;
pub mod drag;
pub mod guidance;
pub mod models;
pub mod park;
pub mod viewport;

pub use config::{ConfigError, MapProfile};
pub use guidance::GuidanceResult;
pub use models::{Category, Location, Point};
pub use park::ParkView;
