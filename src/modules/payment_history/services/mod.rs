pub mod payment_history;

pub use payment_history::{sample_payment_history, PaymentHistoryQuery, PaymentSort};
