use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::batch::{classify_batch, BatchOutcome, IncidentRecord};
use super::detectors::DetectorReport;
use super::domain::ChargeLabel;
use super::intake::IntakePolicy;
use super::ChargeClassifier;
use crate::error::AppError;
use crate::reference::ReferenceKind;

#[derive(Debug, Clone, Copy)]
struct RouterState {
    classifier: ChargeClassifier,
    policy: IntakePolicy,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) include_signals: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    pub(crate) charge: ChargeLabel,
    pub(crate) title: &'static str,
    pub(crate) explanation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rule: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) aggravator_count: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) detectors: Option<DetectorReport>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) incidents: Vec<IncidentRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) results: Vec<BatchOutcome>,
}

/// Router builder exposing classification and reference-guide endpoints.
pub fn classification_router(classifier: ChargeClassifier, policy: IntakePolicy) -> Router {
    Router::new()
        .route("/api/v1/classify", post(classify_handler))
        .route("/api/v1/classify/batch", post(batch_handler))
        .route("/api/v1/reference/:kind", get(reference_handler))
        .with_state(RouterState { classifier, policy })
}

async fn classify_handler(
    State(state): State<RouterState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    state.policy.check_description(&request.description)?;

    let assessment = state.classifier.assess(&request.description);
    let label = assessment.label();
    let signals = request.include_signals;

    Ok(Json(ClassifyResponse {
        charge: label,
        title: label.title(),
        explanation: assessment.result.explanation,
        rule: signals.then_some(assessment.rule),
        aggravator_count: signals.then_some(assessment.aggravator_count),
        detectors: signals.then_some(assessment.detectors),
    }))
}

async fn batch_handler(
    State(state): State<RouterState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    state.policy.check_batch_len(request.incidents.len())?;
    for incident in &request.incidents {
        state.policy.check_description(&incident.description)?;
    }

    let results = classify_batch(&request.incidents);
    info!(incidents = results.len(), "batch classified");

    Ok(Json(BatchResponse { results }))
}

async fn reference_handler(Path(kind): Path<String>) -> Response {
    match kind.parse::<ReferenceKind>() {
        Ok(kind) => {
            let payload = json!({
                "kind": kind,
                "title": kind.title(),
                "examples": kind.examples(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
