pub mod forms;
pub mod trip;

pub use forms::{CommunityTripForm, DateRange, GuidedTripForm, ItineraryDay};
pub use trip::{Trip, TripType};
