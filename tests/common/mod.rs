#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use url_classifier::domain::classifier::{Classifier, ClassifierError};
use url_classifier::domain::features::FeatureRow;
use url_classifier::infrastructure::model::{ModelSummary, TreeEnsemble};
use url_classifier::state::AppState;

pub const MAX_BATCH_SIZE: usize = 5;

/// Always predicts the same class index.
pub struct FixedClassifier(pub i64);

impl Classifier for FixedClassifier {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<i64>, ClassifierError> {
        Ok(vec![self.0; rows.len()])
    }
}

/// Always fails, like a model producing unusable output.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _rows: &[FeatureRow]) -> Result<Vec<i64>, ClassifierError> {
        Err(ClassifierError::InvalidOutput("backend offline".to_string()))
    }
}

pub fn sample_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("models")
        .join("sample_model.json")
}

pub fn test_summary(name: &str) -> ModelSummary {
    ModelSummary {
        name: name.to_string(),
        trees: 1,
        classes: vec![0, 1, 2, 3],
        fingerprint: "0".repeat(64),
    }
}

/// State backed by the bundled sample model.
pub fn create_test_state() -> AppState {
    let model = TreeEnsemble::load(sample_model_path()).unwrap();
    let summary = model.summary();
    AppState::new(Arc::new(model), summary, MAX_BATCH_SIZE)
}

/// State backed by an arbitrary classifier.
pub fn create_state_with(classifier: impl Classifier + 'static) -> AppState {
    AppState::new(Arc::new(classifier), test_summary("stub"), MAX_BATCH_SIZE)
}
