pub mod payment_record;

pub use payment_record::{PaymentKind, PaymentRecord, PaymentRecordStatus};
