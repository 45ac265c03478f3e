pub mod tip_controller;

pub use tip_controller::{configure, list_presets, send_tip};
