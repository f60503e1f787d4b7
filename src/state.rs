use std::sync::Arc;

use crate::application::services::ClassificationService;
use crate::domain::classifier::Classifier;
use crate::infrastructure::model::ModelSummary;

/// Shared, read-only state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub classification_service: Arc<ClassificationService<dyn Classifier>>,
    pub model: Arc<ModelSummary>,
    /// Upper bound on URLs accepted by the batch endpoint.
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, model: ModelSummary, max_batch_size: usize) -> Self {
        Self {
            classification_service: Arc::new(ClassificationService::new(classifier)),
            model: Arc::new(model),
            max_batch_size,
        }
    }
}
