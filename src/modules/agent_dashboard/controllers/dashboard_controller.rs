// HTTP handlers for the agent dashboard
//
// Endpoints:
// - GET /v1/agent/dashboard - Stats and the filtered trip table (agents only)

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::app::AppState;
use crate::core::{Result, Session};
use crate::modules::agent_dashboard::{
    models::{DashboardStats, GuidedTripSummary},
    services::{dashboard_stats, DashboardQuery},
};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub trips: Vec<GuidedTripSummary>,
}

/// GET /v1/agent/dashboard?status=&search=
///
/// # Returns
/// - 200: Stats over every trip plus the trips matching the query
/// - 403: Caller is not an agent
pub async fn get_dashboard(
    session: Session,
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse> {
    session.require_agent()?;

    let stats = dashboard_stats(&state.guided_trips, state.clock.today());
    let trips = query
        .apply(&state.guided_trips)
        .into_iter()
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(DashboardResponse { stats, trips }))
}

/// Configure agent routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/agent").route("/dashboard", web::get().to(get_dashboard)));
}
