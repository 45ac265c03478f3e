// HTTP handlers for tips
//
// Endpoints:
// - GET /v1/tips/presets - One-tap tip amounts
// - POST /v1/tips - Send a tip

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::app::AppState;
use crate::core::{Currency, Result};
use crate::modules::tips::{models::TipRequest, services::TipService};

#[derive(Debug, Serialize)]
pub struct TipPresetsResponse {
    pub currency: Currency,
    pub amounts: Vec<Decimal>,
    /// Display labels in the same order as `amounts`
    pub labels: Vec<String>,
}

/// GET /v1/tips/presets
pub async fn list_presets(state: web::Data<AppState>) -> Result<HttpResponse> {
    let service = state.tips();
    let amounts = TipService::preset_amounts();
    let labels = amounts
        .iter()
        .map(|a| service.format_tip_amount(*a))
        .collect();

    Ok(HttpResponse::Ok().json(TipPresetsResponse {
        currency: state.payments.currency,
        amounts,
        labels,
    }))
}

/// POST /v1/tips
///
/// # Returns
/// - 201: The sent tip
/// - 400: Non-positive amount or tipping yourself
pub async fn send_tip(
    state: web::Data<AppState>,
    body: web::Json<TipRequest>,
) -> Result<HttpResponse> {
    let tip = state.tips().send_tip(body.into_inner(), state.clock.as_ref())?;

    Ok(HttpResponse::Created().json(tip))
}

/// Configure tip routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tips")
            .route("", web::post().to(send_tip))
            .route("/presets", web::get().to(list_presets)),
    );
}
