pub mod dashboard;

pub use dashboard::{dashboard_stats, sample_guided_trips, DashboardQuery};
