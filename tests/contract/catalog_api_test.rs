// Contract tests for trips, tips, payment history and the agent dashboard

use std::sync::Arc;

use actix_web::{test, web, App};
use chrono::NaiveDate;
use ketravelan::config::PaymentConfig;
use ketravelan::core::session::ROLE_HEADER;
use ketravelan::core::FixedClock;
use ketravelan::middleware::SessionContext;
use ketravelan::{configure, AppState};
use serde_json::{json, Value};

fn state() -> web::Data<AppState> {
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    web::Data::new(AppState::new(PaymentConfig::default()).with_clock(Arc::new(clock)))
}

fn trip_ids(body: &Value) -> Vec<u64> {
    body["trips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect()
}

/// GET /v1/trips applies the default budget cap
#[actix_web::test]
async fn test_list_trips_default_budget() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/v1/trips").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    // Rome & Tuscany costs more than the default cap
    assert_eq!(trip_ids(&body), vec![1, 2, 3, 5, 6]);
    assert_eq!(body["total"], 5);
}

#[actix_web::test]
async fn test_list_trips_with_filters() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/v1/trips?type=guided&max_budget=5000&from=2025-07-01&to=2025-09-30")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(trip_ids(&body), vec![2, 4]);

    let req = test::TestRequest::get()
        .uri("/v1/trips?location=costa")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(trip_ids(&body), vec![3]);
}

#[actix_web::test]
async fn test_list_trips_bad_query() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/v1/trips?type=cruise").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

/// POST /v1/trips/community/validate reports field errors
#[actix_web::test]
async fn test_validate_community_trip_contract() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/v1/trips/community/validate")
        .set_json(json!({
            "title": "Bali",
            "location": "Bali",
            "date_range": { "from": "2025-08-01", "to": "2025-08-05" },
            "group_size": 4,
            "budget": "900",
            "description": "Surf, temples and too much nasi goreng.",
            "tags": ["surf"],
            "itinerary": [{ "day": 1, "title": "Arrive", "description": "Canggu" }]
        }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"][0]["field"], "title");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

/// Guided trip forms and the dashboard are for agents only
#[actix_web::test]
async fn test_agent_routes_require_agent_role() {
    let app = test::init_service(
        App::new()
            .app_data(state())
            .wrap(SessionContext)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/v1/agent/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri("/v1/trips/guided/validate")
        .set_json(json!({ "title": "Tour" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

/// GET /v1/agent/dashboard returns stats and filtered trips
#[actix_web::test]
async fn test_agent_dashboard_contract() {
    let app = test::init_service(
        App::new()
            .app_data(state())
            .wrap(SessionContext)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/agent/dashboard?status=upcoming")
        .insert_header((ROLE_HEADER, "agent"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["stats"]["active_trips"], 3);
    assert_eq!(body["stats"]["total_travelers"], 25);
    assert_eq!(body["stats"]["upcoming_departures"], 4);

    let ids: Vec<&str> = body["trips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["GT-12350", "GT-12352"]);
}

/// GET /v1/payments searches, filters and sorts
#[actix_web::test]
async fn test_payment_history_contract() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/v1/payments?kind=refund")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["payments"][0]["id"], "p6");
    assert_eq!(body["payments"][0]["display_amount"], "+$750.00");

    let req = test::TestRequest::get()
        .uri("/v1/payments?status=completed&sort=amount_asc&search=a")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let payments = body["payments"].as_array().unwrap();
    assert!(payments.iter().all(|p| p["status"] == "completed"));
    assert!(payments.iter().all(|p| p["has_receipt"] == true));
    assert_eq!(payments[0]["id"], "p6");
}

/// Tips: presets and sending
#[actix_web::test]
async fn test_tips_contract() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/v1/tips/presets").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["labels"], json!(["$5.00", "$10.00", "$20.00"]));

    let req = test::TestRequest::post()
        .uri("/v1/tips")
        .set_json(json!({
            "amount": "10",
            "message": "Thanks for organizing!",
            "from": { "id": "traveler-1", "name": "Aina" },
            "to": { "id": "organizer-1", "name": "Sarah" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].as_str().unwrap().starts_with("tip-"));
    assert_eq!(body["message"], "Thanks for organizing!");

    let req = test::TestRequest::post()
        .uri("/v1/tips")
        .set_json(json!({
            "amount": "10",
            "from": { "id": "traveler-1", "name": "Aina" },
            "to": { "id": "traveler-1", "name": "Aina" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
