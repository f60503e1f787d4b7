//! DTOs for the prediction endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::label::PredictionLabel;
use crate::error::ErrorBody;

/// Request carrying a single URL.
///
/// The URL is deliberately not validated: any string, including an empty or
/// malformed one, is classifiable.
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

/// Response of `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: PredictionLabel,
}

/// Request to classify several URLs at once.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchPredictRequest {
    #[validate(length(min = 1, message = "At least one URL is required"))]
    pub urls: Vec<String>,
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct BatchPredictResponse {
    pub summary: BatchSummary,
    pub items: Vec<BatchResultItem>,
}

/// Individual result for a URL in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchResultItem {
    Success {
        url: String,
        prediction: PredictionLabel,
    },
    Error {
        url: String,
        #[serde(flatten)]
        error: ErrorBody,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
