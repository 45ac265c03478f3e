use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::core::clock::format_iso8601;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub trip_catalog: bool,
    pub payment_history: bool,
    pub guided_trips: bool,
}

/// GET /health - Liveness probe
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: format_iso8601(state.clock.now()),
    })
}

/// GET /ready - Readiness probe
/// 503 until every catalog the API serves from is loaded
pub async fn readiness_check(state: web::Data<AppState>) -> impl Responder {
    let checks = ReadinessChecks {
        trip_catalog: !state.trips.is_empty(),
        payment_history: !state.payment_history.is_empty(),
        guided_trips: !state.guided_trips.is_empty(),
    };
    let ready = checks.trip_catalog && checks.payment_history && checks.guided_trips;

    if !ready {
        tracing::warn!(?checks, "Readiness check failed");
    }

    let response = ReadinessResponse { ready, checks };
    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
