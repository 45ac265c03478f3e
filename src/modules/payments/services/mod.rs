pub mod payment_scheduler;
pub mod receipt;

pub use payment_scheduler::PaymentScheduler;
pub use receipt::{generate_receipt, CustomerInfo};
