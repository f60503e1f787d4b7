//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// URL classified on every health check.
const CANARY_URL: &str = "https://www.example.com/";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Classifier answered the canary request
/// - **503 Service Unavailable**: Classifier failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "model": {
///     "name": "sample-forest",
///     "trees": 2,
///     "classes": [0, 1, 2, 3],
///     "fingerprint": "9f86d08..."
///   },
///   "checks": {
///     "classifier": { "status": "ok", "message": "Canary classified as SAFE" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let classifier_check = check_classifier(&state);

    let healthy = classifier_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.model.as_ref().clone(),
        checks: HealthChecks {
            classifier: classifier_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Runs one prediction end to end.
fn check_classifier(state: &AppState) -> CheckStatus {
    let service = &state.classification_service;
    let extracted = service.extract(CANARY_URL);

    match service.predict(&extracted.vector) {
        Ok((_, label)) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Canary classified as {label}")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Classifier error: {e}")),
        },
    }
}
