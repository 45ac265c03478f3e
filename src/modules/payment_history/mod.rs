// Payment history module: the traveler's past payments and refunds

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{PaymentKind, PaymentRecord, PaymentRecordStatus};
pub use services::{sample_payment_history, PaymentHistoryQuery, PaymentSort};
