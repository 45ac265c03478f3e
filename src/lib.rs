//! Ketravelan trip finance service
//!
//! Payment plans for guided trips, settlements and tips between travelers on
//! community trips, and the read-only trip catalogs the web client browses.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::{configure, AppState};
pub use modules::payments;
pub use modules::settlements;
