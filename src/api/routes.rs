//! API route configuration.

use crate::api::handlers::{batch_predict_handler, features_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Auxiliary JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /features`       - Feature vector for a URL, without prediction
/// - `POST /predict/batch`  - Classify several URLs in one request
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/features", post(features_handler))
        .route("/predict/batch", post(batch_predict_handler))
}
