// Contract tests for /v1/settlements and /v1/balances

use std::sync::Arc;

use actix_web::{test, web, App};
use chrono::NaiveDate;
use ketravelan::config::PaymentConfig;
use ketravelan::core::FixedClock;
use ketravelan::{configure, AppState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn state() -> web::Data<AppState> {
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap());
    web::Data::new(AppState::new(PaymentConfig::default()).with_clock(Arc::new(clock)))
}

fn amount(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().unwrap(),
        other => other.to_string().parse().unwrap(),
    }
}

fn completed(from: &str, to: &str, amount: &str) -> Value {
    json!({
        "id": format!("settlement-{}-{}", from, to),
        "from_user_id": from,
        "to_user_id": to,
        "amount": amount,
        "description": "Dinner at Jimbaran",
        "date": "2025-06-18T12:00:00Z",
        "status": "completed"
    })
}

/// POST /v1/settlements records a completed settlement
#[actix_web::test]
async fn test_create_settlement_contract() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/v1/settlements")
        .set_json(json!({
            "from_user_id": "sarah",
            "to_user_id": "mike",
            "amount": "45.5",
            "user_balance": "60"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].as_str().unwrap().starts_with("settlement-"));
    assert_eq!(body["status"], "completed");
    assert_eq!(body["description"], "Payment from sarah to mike");
    assert_eq!(amount(&body["amount"]), dec!(45.50));
    assert!(body["date"].as_str().unwrap().starts_with("2025-06-20"));
}

/// Settlements awaiting confirmation start pending
#[actix_web::test]
async fn test_create_settlement_awaiting_confirmation() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/v1/settlements")
        .set_json(json!({
            "from_user_id": "sarah",
            "to_user_id": "mike",
            "amount": "10",
            "await_confirmation": true
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pending");
}

/// Invalid settlements are 400s
#[actix_web::test]
async fn test_create_settlement_rejections() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    for (payload, expected) in [
        (
            json!({ "from_user_id": "sarah", "to_user_id": "sarah", "amount": "10" }),
            "Cannot settle with yourself",
        ),
        (
            json!({ "from_user_id": "sarah", "to_user_id": "mike", "amount": "0" }),
            "Settlement amount must be greater than 0",
        ),
        (
            json!({ "from_user_id": "sarah", "to_user_id": "mike", "amount": "80", "user_balance": "60" }),
            "Cannot settle more than what's owed: $60.00",
        ),
    ] {
        let req = test::TestRequest::post()
            .uri("/v1/settlements")
            .set_json(payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains(expected), "unexpected message: {}", message);
    }
}

/// Amounts finer than a cent would round to zero and are refused
#[actix_web::test]
async fn test_sub_cent_settlement_rejected() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/v1/settlements")
        .set_json(json!({ "from_user_id": "sarah", "to_user_id": "mike", "amount": "0.001" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("at most 2 decimal places"), "unexpected message: {}", message);

    let req = test::TestRequest::post()
        .uri("/v1/settlements/validate")
        .set_json(json!({
            "from_user_id": "sarah",
            "to_user_id": "mike",
            "amount": "0.001",
            "user_balance": "60"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_valid"], false);
}

/// POST /v1/settlements/validate answers with a verdict
#[actix_web::test]
async fn test_validate_settlement_contract() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/v1/settlements/validate")
        .set_json(json!({
            "from_user_id": "sarah",
            "to_user_id": "mike",
            "amount": "20",
            "user_balance": "60"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_valid"], true);
    assert!(body.get("message").is_none());
}

/// POST /v1/balances/net applies only completed settlements
#[actix_web::test]
async fn test_net_balance_contract() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let mut pending = completed("v", "u", "15");
    pending["status"] = json!("pending");

    let req = test::TestRequest::post()
        .uri("/v1/balances/net")
        .set_json(json!({
            "user_id": "u",
            "gross_balance": "100",
            "settlements": [completed("u", "v", "40"), pending]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(amount(&body["net_balance"]), dec!(140));
    assert_eq!(body["has_completed_settlements"], true);
}

/// POST /v1/balances/reconcile recomputes every user's net balance
#[actix_web::test]
async fn test_reconcile_contract() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/v1/balances/reconcile")
        .set_json(json!({
            "balances": [
                { "user_id": "a", "name": "Aina", "gross_balance": "-30" },
                { "user_id": "b", "name": "Ben", "gross_balance": "30" }
            ],
            "settlements": [completed("a", "b", "30")]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let balances = body["balances"].as_array().unwrap();
    assert_eq!(balances.len(), 2);
    for balance in balances {
        assert_eq!(amount(&balance["net_balance"]), Decimal::ZERO);
        assert_eq!(balance["settlements"].as_array().unwrap().len(), 1);
    }
}
