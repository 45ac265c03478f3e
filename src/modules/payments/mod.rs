// Payments module: guided-trip payment plans and receipts

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::{create_payment_plan, create_receipt, validate_payment};
pub use models::{AgentBranding, DueDate, Installment, InstallmentStatus, PaymentPlan, PaymentTerms};
pub use services::{generate_receipt, CustomerInfo, PaymentScheduler};
