pub mod tip_service;

pub use tip_service::{TipService, PRESET_TIP_AMOUNTS};
