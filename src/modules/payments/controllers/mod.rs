pub mod payment_plan_controller;

pub use payment_plan_controller::{
    configure, create_payment_plan, create_receipt, plan_status, validate_payment,
};
