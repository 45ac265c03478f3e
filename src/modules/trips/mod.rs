// Trips module: discovery catalog and trip creation forms

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CommunityTripForm, GuidedTripForm, Trip, TripType};
pub use services::{sample_trips, TripFilter};
