// HTTP handlers for trip discovery and trip creation forms
//
// Endpoints:
// - GET /v1/trips - Filter the trip catalog
// - POST /v1/trips/community/validate - Check a community trip form
// - POST /v1/trips/guided/validate - Check a guided trip form

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::app::AppState;
use crate::core::{Result, Session};
use crate::modules::trips::{
    models::{CommunityTripForm, GuidedTripForm, Trip},
    services::{validate_community_trip, validate_guided_trip, TripFilter},
};

#[derive(Debug, Serialize)]
pub struct TripListResponse {
    pub trips: Vec<Trip>,
    pub total: usize,
}

/// GET /v1/trips?type=&location=&from=&to=&max_budget=
///
/// Without `max_budget` the configured default cap applies.
pub async fn list_trips(
    state: web::Data<AppState>,
    query: web::Query<TripFilter>,
) -> Result<HttpResponse> {
    let filter = query
        .into_inner()
        .with_default_budget(state.payments.default_budget_cap);
    let trips: Vec<Trip> = filter.apply(&state.trips).into_iter().cloned().collect();

    tracing::debug!(matched = trips.len(), "Filtered trip catalog");

    Ok(HttpResponse::Ok().json(TripListResponse {
        total: trips.len(),
        trips,
    }))
}

/// POST /v1/trips/community/validate
///
/// Always 200 with a report listing every failing rule.
pub async fn validate_community(
    body: web::Json<CommunityTripForm>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(validate_community_trip(&body)))
}

/// POST /v1/trips/guided/validate
///
/// # Returns
/// - 200: Validation report
/// - 403: Caller is not an agent
pub async fn validate_guided(
    session: Session,
    body: web::Json<GuidedTripForm>,
) -> Result<HttpResponse> {
    session.require_agent()?;

    Ok(HttpResponse::Ok().json(validate_guided_trip(&body)))
}

/// Configure trip routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/trips")
            .route("", web::get().to(list_trips))
            .route("/community/validate", web::post().to(validate_community))
            .route("/guided/validate", web::post().to(validate_guided)),
    );
}
