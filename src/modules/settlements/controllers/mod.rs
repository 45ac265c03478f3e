pub mod settlement_controller;

pub use settlement_controller::{
    configure, create_settlement, net_balance, reconcile_balances, validate_settlement,
};
