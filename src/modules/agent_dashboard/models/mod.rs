pub mod guided_trip;

pub use guided_trip::{DashboardStats, GuidedTripStatus, GuidedTripSummary};
