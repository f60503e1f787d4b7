//! URL classification service.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::classifier::{Classifier, ClassifierError};
use crate::domain::features::{FeatureVector, assemble};
use crate::domain::label::PredictionLabel;
use crate::domain::normalizer::{NormalizedUrl, normalize};
use crate::error::AppError;

/// Feature extraction result for one URL.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedFeatures {
    pub normalized_url: String,
    pub vector: FeatureVector,
}

/// Full classification result for one URL.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub normalized_url: String,
    pub vector: FeatureVector,
    pub class_index: i64,
    pub label: PredictionLabel,
}

/// Runs the normalize → extract → predict → resolve pipeline.
///
/// Holds the classifier as a shared read-only capability; the service itself
/// keeps no per-request state.
pub struct ClassificationService<C: Classifier + ?Sized> {
    classifier: Arc<C>,
}

impl<C: Classifier + ?Sized> ClassificationService<C> {
    /// Creates a new classification service.
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    /// Normalizes a raw URL and computes its feature vector.
    ///
    /// Never fails: malformed URLs still produce a complete vector.
    pub fn extract(&self, raw_url: &str) -> ExtractedFeatures {
        let normalized = normalize(raw_url);
        let vector = assemble(&normalized);

        ExtractedFeatures {
            normalized_url: normalized.into_inner(),
            vector,
        }
    }

    /// Predicts the label for a prepared feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError`] if the classifier fails or returns no
    /// prediction for the row.
    pub fn predict(&self, vector: &FeatureVector) -> Result<(i64, PredictionLabel), ClassifierError> {
        let predictions = self.classifier.predict(&[vector.to_row()])?;

        let class_index = predictions.first().copied().ok_or_else(|| {
            ClassifierError::InvalidOutput("no prediction returned for input row".to_string())
        })?;

        Ok((class_index, PredictionLabel::resolve(class_index)))
    }

    /// Classifies a raw, untrusted URL string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only when the classifier fails.
    /// Malformed URLs and unknown class indices are not errors.
    pub fn classify(&self, raw_url: &str) -> Result<Classification, AppError> {
        let normalized = normalize(raw_url);
        self.classify_normalized(normalized)
    }

    fn classify_normalized(&self, normalized: NormalizedUrl) -> Result<Classification, AppError> {
        let vector = assemble(&normalized);
        tracing::debug!(url = %normalized, features = ?vector.values(), "Extracted URL features");

        let (class_index, label) = self.predict(&vector)?;

        if label == PredictionLabel::Undefined {
            tracing::warn!(class_index, "Classifier returned unknown class index");
        }
        tracing::info!(label = %label, "URL classified");
        metrics::counter!("url_predictions_total", "label" => label.as_str()).increment(1);

        Ok(Classification {
            normalized_url: normalized.into_inner(),
            vector,
            class_index,
            label,
        })
    }
}
