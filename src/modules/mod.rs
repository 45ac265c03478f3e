pub mod agent_dashboard;
pub mod health;
pub mod payment_history;
pub mod payments;
pub mod settlements;
pub mod tips;
pub mod trips;
