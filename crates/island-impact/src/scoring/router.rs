use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::{error, info, warn};

use super::domain::LifestyleQuestionnaire;
use super::engine::ImpactEngine;
use super::report::ImpactReport;

/// Router builder exposing HTTP endpoints for impact evaluation.
pub fn impact_router(engine: Arc<ImpactEngine>) -> Router {
    Router::new()
        .route("/api/v1/impact/evaluate", post(evaluate_handler))
        .route("/api/v1/impact/factors", get(factors_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<ImpactEngine>>,
    axum::Json(questionnaire): axum::Json<LifestyleQuestionnaire>,
) -> Response {
    let report = engine
        .assess(questionnaire)
        .and_then(|assessment| ImpactReport::build(assessment, engine.factors()));

    match report {
        Ok(report) => {
            info!(
                overall = report.result.overall_score,
                band = report.overall_band.label(),
                "questionnaire scored"
            );
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(err) if err.is_input_error() => {
            warn!(%err, "questionnaire rejected");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err) => {
            error!(%err, "impact engine misconfigured");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn factors_handler(State(engine): State<Arc<ImpactEngine>>) -> Response {
    (StatusCode::OK, axum::Json(engine.factors().clone())).into_response()
}
