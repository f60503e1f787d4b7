//! DTOs for the feature extraction endpoint.

use serde::Serialize;

use crate::application::services::ExtractedFeatures;
use crate::domain::features::{Feature, FeatureVector};

/// A single named feature value.
#[derive(Debug, Serialize)]
pub struct NamedFeature {
    pub name: Feature,
    pub value: i64,
}

/// Response of `POST /api/features`.
///
/// `vector` is the raw model input in column order; `features` pairs each
/// value with its name for inspection.
#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub normalized_url: String,
    pub features: Vec<NamedFeature>,
    pub vector: FeatureVector,
}

impl From<ExtractedFeatures> for FeaturesResponse {
    fn from(extracted: ExtractedFeatures) -> Self {
        let features = extracted
            .vector
            .iter()
            .map(|(name, value)| NamedFeature { name, value })
            .collect();

        Self {
            normalized_url: extracted.normalized_url,
            features,
            vector: extracted.vector,
        }
    }
}
