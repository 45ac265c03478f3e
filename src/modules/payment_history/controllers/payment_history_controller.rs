// HTTP handlers for the traveler's payment history
//
// Endpoints:
// - GET /v1/payments - Search, filter and sort past payments

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::app::AppState;
use crate::core::Result;
use crate::modules::payment_history::{
    models::PaymentRecord, services::PaymentHistoryQuery,
};

#[derive(Debug, Serialize)]
pub struct PaymentHistoryEntry {
    #[serde(flatten)]
    pub record: PaymentRecord,
    pub display_amount: String,
    pub has_receipt: bool,
}

#[derive(Debug, Serialize)]
pub struct PaymentHistoryResponse {
    pub payments: Vec<PaymentHistoryEntry>,
    pub total: usize,
}

/// GET /v1/payments?search=&status=&kind=&sort=
pub async fn list_payments(
    state: web::Data<AppState>,
    query: web::Query<PaymentHistoryQuery>,
) -> Result<HttpResponse> {
    let currency = state.payments.currency;
    let payments: Vec<PaymentHistoryEntry> = query
        .apply(&state.payment_history)
        .into_iter()
        .map(|record| PaymentHistoryEntry {
            display_amount: record.display_amount(currency),
            has_receipt: record.has_receipt(),
            record,
        })
        .collect();

    Ok(HttpResponse::Ok().json(PaymentHistoryResponse {
        total: payments.len(),
        payments,
    }))
}

/// Configure payment history routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/payments", web::get().to(list_payments));
}
