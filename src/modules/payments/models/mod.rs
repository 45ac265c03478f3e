pub mod payment_plan;

pub use payment_plan::{
    AgentBranding, DueDate, Installment, InstallmentStatus, PaymentPlan, PaymentTerms,
};
