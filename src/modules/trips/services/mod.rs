pub mod trip_filter;
pub mod trip_forms;

pub use trip_filter::{sample_trips, TripFilter};
pub use trip_forms::{
    community_trip_rules, guided_trip_rules, validate_community_trip, validate_guided_trip,
};
