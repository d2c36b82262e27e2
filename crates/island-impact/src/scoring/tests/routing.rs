use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::scoring::engine::ImpactEngine;
use crate::scoring::factors::{names, EnvironmentalFactors, FactorDomain};
use crate::scoring::router::{evaluate_handler, factors_handler};

fn evaluate_request(body: Vec<u8>) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/impact/evaluate")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_returns_report() {
    let router = router_with_engine(engine());

    let response = router
        .oneshot(evaluate_request(
            serde_json::to_vec(&questionnaire()).expect("serializable"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["region"], "Oahu");
    assert_eq!(payload["result"]["overall_score"], 90);
    assert_eq!(payload["result"]["carbon_footprint"], 5.7);
    assert_eq!(payload["result"]["water_usage"], 42);
    assert_eq!(payload["result"]["waste_generation"], 11);
    assert_eq!(payload["result"]["areas_for_improvement"], json!(["water"]));
}

#[tokio::test]
async fn evaluate_handler_returns_unprocessable_for_bad_answers() {
    let mut form = questionnaire();
    form.household_size = 0;

    let response = evaluate_handler(State(Arc::new(engine())), axum::Json(form)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("household_size"), "{message}");
}

#[tokio::test]
async fn evaluate_handler_returns_unprocessable_for_unknown_label() {
    let mut form = questionnaire();
    form.diet_type = "Carnivore".to_string();

    let response = evaluate_handler(State(Arc::new(engine())), axum::Json(form)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn evaluate_handler_returns_internal_error_without_factors() {
    let engine = ImpactEngine::new(EnvironmentalFactors::empty("Nowhere"));

    let response = evaluate_handler(State(Arc::new(engine)), axum::Json(questionnaire())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("is not configured")));
}

#[tokio::test]
async fn evaluate_route_rejects_incomplete_payloads() {
    let router = router_with_engine(engine());
    let body = serde_json::to_vec(&json!({ "car_usage": 10.0 })).expect("serializable");

    let response = router
        .oneshot(evaluate_request(body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn factors_route_lists_the_regional_table() {
    let router = router_with_engine(engine());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/impact/factors")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["region"], "Oahu");
    assert_eq!(payload["table"]["carbon"]["island_multiplier"], 1.2);
    assert_eq!(payload["table"]["water"]["freshwater_scarcity"], 0.7);
}

#[tokio::test]
async fn factors_handler_reflects_overrides() {
    let factors =
        EnvironmentalFactors::oahu().with_factor(FactorDomain::Food, names::IMPORT_DEPENDENCY, 0.5);

    let response = factors_handler(State(Arc::new(ImpactEngine::new(factors)))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["table"]["food"]["import_dependency"], 0.5);
}
