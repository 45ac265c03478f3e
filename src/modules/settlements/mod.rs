// Settlements module: peer-to-peer repayments within community trips

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::{create_settlement, net_balance, reconcile_balances, validate_settlement};
pub use models::{Settlement, SettlementRequest, SettlementStatus, UserBalance};
pub use services::SettlementLedger;
