pub mod trip_controller;

pub use trip_controller::{configure, list_trips, validate_community, validate_guided};
