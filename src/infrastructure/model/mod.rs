//! Model loading for the [`crate::domain::classifier::Classifier`] contract.
//!
//! Provides [`TreeEnsemble`], a decision-tree ensemble described as JSON.
//!
//! # Format
//!
//! ```json
//! {
//!   "name": "sample-forest",
//!   "feature_count": 19,
//!   "classes": [0, 1, 2, 3],
//!   "trees": [
//!     {
//!       "nodes": [
//!         { "feature": 5, "threshold": 0.5, "left": 1, "right": 2 },
//!         { "value": [1.0, 0.0, 0.0, 0.0] },
//!         { "value": [0.0, 0.0, 1.0, 0.0] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Node 0 is the root. A split goes to `left` when the row's value for
//! `feature` is `<= threshold`. Leaf `value` holds one weight per entry of
//! `classes`.

mod tree_ensemble;

use serde::Serialize;

pub use tree_ensemble::{Node, Tree, TreeEnsemble};

/// Errors raised while loading a model file.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model expects {found} features, extractor produces {expected}")]
    FeatureCountMismatch { expected: usize, found: usize },

    #[error("Model declares no classes")]
    NoClasses,

    #[error("Model contains no trees")]
    NoTrees,

    #[error("Invalid node {node} in tree {tree}: {reason}")]
    InvalidNode {
        tree: usize,
        node: usize,
        reason: String,
    },
}

/// Descriptive information about a loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub trees: usize,
    pub classes: Vec<i64>,
    /// Hex SHA-256 of the model file contents.
    pub fingerprint: String,
}
