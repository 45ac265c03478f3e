pub mod settlement;

pub use settlement::{Settlement, SettlementRequest, SettlementStatus, UserBalance};
