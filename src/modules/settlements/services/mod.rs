pub mod settlement_ledger;

pub use settlement_ledger::SettlementLedger;
