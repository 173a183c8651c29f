use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{SubmissionPayload, SubmissionReceipt};
use super::service::{IntakeError, IntakeService};
use super::store::{ApplicationStore, StoreError};

const SUBMIT_OK_MESSAGE: &str = "Application submitted successfully";
const SUBMIT_FAILED_MESSAGE: &str =
    "An error occurred while saving your application. Please try again.";
const NOT_FOUND_MESSAGE: &str = "Application not found";

/// Router builder exposing the two intake endpoints.
pub fn intake_router<S>(service: Arc<IntakeService<S>>) -> Router
where
    S: ApplicationStore + 'static,
{
    Router::new()
        .route("/api/applications", post(submit_handler::<S>))
        .route("/api/applications/:application_id", get(fetch_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<IntakeService<S>>>,
    axum::Json(payload): axum::Json<SubmissionPayload>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.submit(payload) {
        Ok(record) => {
            let receipt = SubmissionReceipt {
                message: SUBMIT_OK_MESSAGE.to_string(),
                application_id: record.application_id,
            };
            (StatusCode::CREATED, axum::Json(receipt)).into_response()
        }
        Err(IntakeError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            tracing::error!("failed to save application: {other}");
            let payload = json!({
                "error": SUBMIT_FAILED_MESSAGE,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<S>(
    State(service): State<Arc<IntakeService<S>>>,
    Path(application_id): Path<String>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.fetch(&application_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(IntakeError::InvalidId(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(IntakeError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "error": NOT_FOUND_MESSAGE,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            tracing::error!("failed to load application: {other}");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
