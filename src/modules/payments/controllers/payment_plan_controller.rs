// HTTP handlers for the guided-trip payment calculator
//
// Endpoints:
// - POST /v1/payment-plans - Compute a deposit + monthly installment plan
// - POST /v1/payment-plans/validate - Check an initial payment amount
// - POST /v1/payment-plans/receipt - Render a receipt for a paid installment
// - POST /v1/payment-plans/status - Flag overdue installments and total what is owed

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::core::Result;
use crate::modules::payments::{
    models::{AgentBranding, Installment, PaymentPlan, PaymentTerms},
    services::{generate_receipt, CustomerInfo},
};

/// Request for POST /v1/payment-plans
#[derive(Debug, Deserialize)]
pub struct CreatePaymentPlanRequest {
    #[serde(default)]
    pub trip_id: Option<String>,
    pub total_amount: Decimal,
    pub minimum_deposit: Decimal,
    pub initial_payment: Decimal,
    pub term_months: u32,
    pub agent: AgentBranding,
}

/// Response for POST /v1/payment-plans
#[derive(Debug, Serialize)]
pub struct PaymentPlanResponse {
    #[serde(flatten)]
    pub plan: PaymentPlan,
    pub monthly_payment: Decimal,
}

/// Request for POST /v1/payment-plans/validate
#[derive(Debug, Deserialize)]
pub struct ValidatePaymentRequest {
    pub amount: Decimal,
    pub minimum_deposit: Decimal,
    pub total_amount: Decimal,
}

/// Request for POST /v1/payment-plans/receipt
#[derive(Debug, Deserialize)]
pub struct ReceiptRequest {
    pub installment: Installment,
    pub agent: AgentBranding,
    pub customer: CustomerInfo,
}

#[derive(Debug, Serialize)]
pub struct ReceiptResponse {
    pub receipt: String,
}

/// Request for POST /v1/payment-plans/status
#[derive(Debug, Deserialize)]
pub struct PlanStatusRequest {
    pub plan: PaymentPlan,
}

/// Response for POST /v1/payment-plans/status
#[derive(Debug, Serialize)]
pub struct PlanStatusResponse {
    #[serde(flatten)]
    pub plan: PaymentPlan,
    pub newly_overdue: usize,
    pub outstanding: Decimal,
}

/// POST /v1/payment-plans
///
/// Computes the payment plan for the given terms. Monthly due dates are
/// anchored to the server's current date.
///
/// # Returns
/// - 200: Plan with deposit and monthly installments
/// - 400: Initial payment below the minimum deposit or above the total, or
///   an invalid term
pub async fn create_payment_plan(
    state: web::Data<AppState>,
    body: web::Json<CreatePaymentPlanRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    let terms = PaymentTerms {
        total_amount: request.total_amount,
        minimum_deposit: request.minimum_deposit,
        initial_payment: request.initial_payment,
        term_months: request.term_months,
    };

    let mut plan = state
        .scheduler()
        .compute_schedule_now(&terms, request.agent, state.clock.as_ref())?;
    plan.trip_id = request.trip_id;

    let monthly_payment = plan.monthly_payment();
    Ok(HttpResponse::Ok().json(PaymentPlanResponse {
        plan,
        monthly_payment,
    }))
}

/// POST /v1/payment-plans/validate
///
/// Always 200; the body says whether the amount is acceptable and why not.
pub async fn validate_payment(
    state: web::Data<AppState>,
    body: web::Json<ValidatePaymentRequest>,
) -> Result<HttpResponse> {
    let validation = state.scheduler().validate_payment_amount(
        body.amount,
        body.minimum_deposit,
        body.total_amount,
    );

    Ok(HttpResponse::Ok().json(validation))
}

/// POST /v1/payment-plans/receipt
///
/// # Returns
/// - 200: Receipt text dated today
/// - 400: Installment is not paid
pub async fn create_receipt(
    state: web::Data<AppState>,
    body: web::Json<ReceiptRequest>,
) -> Result<HttpResponse> {
    let receipt = generate_receipt(
        &body.installment,
        &body.agent,
        &body.customer,
        state.clock.today(),
        state.payments.currency,
    )?;

    Ok(HttpResponse::Ok().json(ReceiptResponse { receipt }))
}

/// POST /v1/payment-plans/status
///
/// Marks pending installments whose due date is before today as overdue and
/// returns the updated plan with the amount still owed.
pub async fn plan_status(
    state: web::Data<AppState>,
    body: web::Json<PlanStatusRequest>,
) -> Result<HttpResponse> {
    let mut plan = body.into_inner().plan;
    let newly_overdue = plan.mark_overdue(state.clock.today());
    let outstanding = plan.outstanding();

    if newly_overdue > 0 {
        tracing::info!(
            trip_id = plan.trip_id.as_deref().unwrap_or("-"),
            newly_overdue,
            outstanding = %outstanding,
            "Flagged overdue installments"
        );
    }

    Ok(HttpResponse::Ok().json(PlanStatusResponse {
        plan,
        newly_overdue,
        outstanding,
    }))
}

/// Configure payment plan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payment-plans")
            .route("", web::post().to(create_payment_plan))
            .route("/validate", web::post().to(validate_payment))
            .route("/receipt", web::post().to(create_receipt))
            .route("/status", web::post().to(plan_status)),
    );
}
