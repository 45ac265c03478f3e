pub mod payment_history_controller;

pub use payment_history_controller::{configure, list_payments};
