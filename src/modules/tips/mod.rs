// Tips module: voluntary payments to trip organizers and agents

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Participant, Tip, TipRequest};
pub use services::TipService;
