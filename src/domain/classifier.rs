//! Classifier contract.

use crate::domain::features::FeatureRow;

/// Errors a classifier backend can report.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Classifier produced invalid output: {0}")]
    InvalidOutput(String),
}

/// A pre-trained model mapping feature rows to class indices.
///
/// Implementations are loaded once at startup and shared read-only between
/// requests, so inference must not mutate state.
///
/// # Implementations
///
/// - [`crate::infrastructure::model::TreeEnsemble`] - JSON decision-tree ensemble
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Predicts one class index per input row, in input order.
    ///
    /// Class indices outside the known label set are allowed; callers map
    /// them to [`crate::domain::label::PredictionLabel::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError`] when the backend cannot produce a prediction.
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<i64>, ClassifierError>;
}
