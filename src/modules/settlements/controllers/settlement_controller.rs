// HTTP handlers for community trip settlements and balances
//
// Endpoints:
// - POST /v1/settlements - Record a settlement between two travelers
// - POST /v1/settlements/validate - Check a settlement request
// - POST /v1/balances/net - Net balance for one traveler
// - POST /v1/balances/reconcile - Net balances for a whole group

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::core::{AppError, Result};
use crate::modules::settlements::{
    models::{Settlement, SettlementRequest, UserBalance},
    services::SettlementLedger,
};

/// Request for POST /v1/settlements
#[derive(Debug, Deserialize)]
pub struct CreateSettlementRequest {
    pub from_user_id: String,
    pub to_user_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    /// Balance shown in the dialog; when present the amount is capped by it
    #[serde(default)]
    pub user_balance: Option<Decimal>,
    /// Record as pending until the payee confirms
    #[serde(default)]
    pub await_confirmation: bool,
}

/// Request for POST /v1/settlements/validate
#[derive(Debug, Deserialize)]
pub struct ValidateSettlementRequest {
    pub from_user_id: String,
    pub to_user_id: String,
    pub amount: Decimal,
    pub user_balance: Decimal,
}

/// Request for POST /v1/balances/net
#[derive(Debug, Deserialize)]
pub struct NetBalanceRequest {
    pub user_id: String,
    pub gross_balance: Decimal,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

#[derive(Debug, Serialize)]
pub struct NetBalanceResponse {
    pub user_id: String,
    pub gross_balance: Decimal,
    pub net_balance: Decimal,
    pub has_completed_settlements: bool,
}

/// Request for POST /v1/balances/reconcile
#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    pub balances: Vec<UserBalance>,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

#[derive(Debug, Serialize)]
pub struct ReconcileResponse {
    pub balances: Vec<UserBalance>,
}

/// POST /v1/settlements
///
/// # Returns
/// - 201: The recorded settlement
/// - 400: Zero or negative amount, an amount finer than the currency allows,
///   settling with yourself, or more than owed
pub async fn create_settlement(
    state: web::Data<AppState>,
    body: web::Json<CreateSettlementRequest>,
) -> Result<HttpResponse> {
    let body = body.into_inner();
    let ledger = state.ledger();
    let request = SettlementRequest {
        from_user_id: body.from_user_id,
        to_user_id: body.to_user_id,
        amount: body.amount,
        description: body.description,
    };

    if let Some(user_balance) = body.user_balance {
        let verdict = ledger.validate_request(&request, user_balance);
        if !verdict.is_valid {
            return Err(AppError::validation(
                verdict.message.unwrap_or_else(|| "Invalid settlement".to_string()),
            ));
        }
    }

    let settlement = if body.await_confirmation {
        ledger.open_settlement(request, state.clock.as_ref())?
    } else {
        ledger.process_settlement(request, state.clock.as_ref())?
    };

    Ok(HttpResponse::Created().json(settlement))
}

/// POST /v1/settlements/validate
pub async fn validate_settlement(
    state: web::Data<AppState>,
    body: web::Json<ValidateSettlementRequest>,
) -> Result<HttpResponse> {
    let body = body.into_inner();
    let request = SettlementRequest {
        from_user_id: body.from_user_id,
        to_user_id: body.to_user_id,
        amount: body.amount,
        description: None,
    };
    let verdict = state.ledger().validate_request(&request, body.user_balance);

    Ok(HttpResponse::Ok().json(verdict))
}

/// POST /v1/balances/net
///
/// The caller supplies the full settlement history; only completed
/// settlements touching the user change the result.
pub async fn net_balance(body: web::Json<NetBalanceRequest>) -> Result<HttpResponse> {
    let body = body.into_inner();
    let net_balance =
        SettlementLedger::net_balance(&body.user_id, body.gross_balance, &body.settlements);
    let has_completed_settlements = SettlementLedger::user_settlements(&body.settlements, &body.user_id)
        .iter()
        .any(|s| s.is_completed());

    Ok(HttpResponse::Ok().json(NetBalanceResponse {
        user_id: body.user_id,
        gross_balance: body.gross_balance,
        net_balance,
        has_completed_settlements,
    }))
}

/// POST /v1/balances/reconcile
pub async fn reconcile_balances(body: web::Json<ReconcileRequest>) -> Result<HttpResponse> {
    let body = body.into_inner();
    let balances = SettlementLedger::reconcile(body.balances, &body.settlements);

    Ok(HttpResponse::Ok().json(ReconcileResponse { balances }))
}

/// Configure settlement and balance routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settlements")
            .route("", web::post().to(create_settlement))
            .route("/validate", web::post().to(validate_settlement)),
    )
    .service(
        web::scope("/balances")
            .route("/net", web::post().to(net_balance))
            .route("/reconcile", web::post().to(reconcile_balances)),
    );
}
