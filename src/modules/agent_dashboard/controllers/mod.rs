pub mod dashboard_controller;

pub use dashboard_controller::{configure, get_dashboard};
