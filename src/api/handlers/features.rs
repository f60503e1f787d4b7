//! Handler for feature extraction endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::features::FeaturesResponse;
use crate::api::dto::predict::UrlRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the feature vector the classifier would receive for a URL.
///
/// # Endpoint
///
/// `POST /api/features`
///
/// # Response
///
/// ```json
/// {
///   "normalized_url": "example.com/foo",
///   "features": [
///     { "name": "count_dot", "value": 1 },
///     { "name": "tld_length", "value": -1 }
///   ],
///   "vector": [1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 13, 3, -1]
/// }
/// ```
///
/// The `features` array above is abbreviated; it always holds 19 entries.
pub async fn features_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<FeaturesResponse>, AppError> {
    let Json(payload) = payload?;

    let extracted = state.classification_service.extract(&payload.url);

    Ok(Json(extracted.into()))
}
