//! Handlers for URL prediction endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::predict::{
    BatchPredictRequest, BatchPredictResponse, BatchResultItem, BatchSummary, PredictResponse,
    UrlRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Classifies a single URL.
///
/// # Endpoint
///
/// `POST /predict`
///
/// # Request Body
///
/// ```json
/// { "url": "http://www.paypal-login.bit.ly/update?id=1" }
/// ```
///
/// # Response
///
/// ```json
/// { "prediction": "PHISHING" }
/// ```
///
/// `prediction` is one of `SAFE`, `DEFACEMENT`, `PHISHING`, `MALWARE` or
/// `Undefined`.
///
/// # Errors
///
/// Returns 400 with `{"error": ...}` for a malformed body and 500 if the
/// classifier fails.
pub async fn predict_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(payload) = payload?;

    let classification = state.classification_service.classify(&payload.url)?;

    Ok(Json(PredictResponse {
        prediction: classification.label,
    }))
}

/// Classifies several URLs.
///
/// # Endpoint
///
/// `POST /api/predict/batch`
///
/// # Batch Processing
///
/// Processes URLs independently. If one fails, others continue processing.
/// Each result includes either a prediction or error information.
///
/// # Request Body
///
/// ```json
/// { "urls": ["example.com", "http://bit.ly/abc"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "successful": 2, "failed": 0 },
///   "items": [
///     { "url": "example.com", "prediction": "SAFE" },
///     { "url": "http://bit.ly/abc", "prediction": "PHISHING" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty or longer than the configured
/// `MAX_BATCH_SIZE`.
pub async fn batch_predict_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchPredictRequest>, JsonRejection>,
) -> Result<Json<BatchPredictResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    if payload.urls.len() > state.max_batch_size {
        return Err(AppError::bad_request(format!(
            "Too many URLs: {} (max {})",
            payload.urls.len(),
            state.max_batch_size
        )));
    }

    let total = payload.urls.len();
    let mut items = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for url in payload.urls {
        match state.classification_service.classify(&url) {
            Ok(classification) => {
                successful += 1;
                items.push(BatchResultItem::Success {
                    url,
                    prediction: classification.label,
                });
            }
            Err(err) => {
                failed += 1;
                items.push(BatchResultItem::Error {
                    url,
                    error: err.to_error_body(),
                });
            }
        }
    }

    Ok(Json(BatchPredictResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items,
    }))
}
