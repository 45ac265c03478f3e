// Agent dashboard module: an agent's guided trips and headline stats

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DashboardStats, GuidedTripStatus, GuidedTripSummary};
pub use services::{dashboard_stats, sample_guided_trips, DashboardQuery};
