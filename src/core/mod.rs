pub mod clock;
pub mod currency;
pub mod error;
pub mod session;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::Currency;
pub use error::{AppError, Result};
pub use session::{Session, UserRole};
pub use validation::{AmountValidation, FieldError, ValidationReport, ValidationRules};
