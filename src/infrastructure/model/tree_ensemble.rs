//! Decision-tree ensemble classifier loaded from JSON.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;

use super::{ModelError, ModelSummary};
use crate::domain::classifier::{Classifier, ClassifierError};
use crate::domain::features::{FEATURE_COUNT, FeatureRow};

/// A tree node: a threshold split or a leaf with per-class weights.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Go to `left` when `row[feature] <= threshold`, otherwise to `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

/// Serialized model document.
#[derive(Debug, Clone, Deserialize)]
struct ModelDocument {
    name: String,
    feature_count: usize,
    classes: Vec<i64>,
    trees: Vec<Tree>,
}

/// A validated tree ensemble.
///
/// Prediction averages the normalized leaf distributions of all trees and
/// picks the class with the highest score; the first class wins ties.
///
/// Loading validates the whole structure, so inference never indexes out of
/// bounds and always terminates.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    name: String,
    classes: Vec<i64>,
    trees: Vec<Tree>,
    fingerprint: String,
}

impl TreeEnsemble {
    /// Reads and validates a model file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Io`] if the file cannot be read, and any error of
    /// [`Self::from_json`] for invalid content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&bytes)
    }

    /// Parses and validates a model document.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Parse`] for malformed JSON
    /// - [`ModelError::FeatureCountMismatch`] if the model expects a different column count
    /// - [`ModelError::NoClasses`] / [`ModelError::NoTrees`] for empty models
    /// - [`ModelError::InvalidNode`] for broken tree structure
    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        let document: ModelDocument = serde_json::from_slice(bytes)?;

        if document.feature_count != FEATURE_COUNT {
            return Err(ModelError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                found: document.feature_count,
            });
        }
        if document.classes.is_empty() {
            return Err(ModelError::NoClasses);
        }
        if document.trees.is_empty() {
            return Err(ModelError::NoTrees);
        }

        for (tree_index, tree) in document.trees.iter().enumerate() {
            validate_tree(tree_index, tree, document.classes.len())?;
        }

        Ok(Self {
            name: document.name,
            classes: document.classes,
            trees: document.trees,
            fingerprint: hex::encode(Sha256::digest(bytes)),
        })
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            name: self.name.clone(),
            trees: self.trees.len(),
            classes: self.classes.clone(),
            fingerprint: self.fingerprint.clone(),
        }
    }

    fn predict_row(&self, row: &FeatureRow) -> i64 {
        let mut scores = vec![0.0; self.classes.len()];

        for tree in &self.trees {
            let leaf = walk(tree, row);
            let total: f64 = leaf.iter().sum();
            if total > 0.0 {
                for (score, weight) in scores.iter_mut().zip(leaf) {
                    *score += weight / total;
                }
            }
        }

        let mut best = 0;
        for (index, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = index;
            }
        }

        self.classes[best]
    }
}

impl Classifier for TreeEnsemble {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<i64>, ClassifierError> {
        Ok(rows.iter().map(|row| self.predict_row(row)).collect())
    }
}

/// Follows splits from the root to a leaf.
fn walk<'t>(tree: &'t Tree, row: &FeatureRow) -> &'t [f64] {
    let mut index = 0;
    loop {
        match &tree.nodes[index] {
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                index = if row[*feature] <= *threshold {
                    *left
                } else {
                    *right
                };
            }
            Node::Leaf { value } => return value,
        }
    }
}

fn validate_tree(tree_index: usize, tree: &Tree, class_count: usize) -> Result<(), ModelError> {
    let invalid = |node: usize, reason: String| ModelError::InvalidNode {
        tree: tree_index,
        node,
        reason,
    };

    if tree.nodes.is_empty() {
        return Err(invalid(0, "tree has no nodes".to_string()));
    }

    let node_count = tree.nodes.len();
    for (node_index, node) in tree.nodes.iter().enumerate() {
        match node {
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= FEATURE_COUNT {
                    return Err(invalid(
                        node_index,
                        format!("feature {feature} out of range"),
                    ));
                }
                if threshold.is_nan() {
                    return Err(invalid(node_index, "threshold is NaN".to_string()));
                }
                for child in [*left, *right] {
                    // Children after their parent rule out cycles.
                    if child <= node_index || child >= node_count {
                        return Err(invalid(node_index, format!("invalid child index {child}")));
                    }
                }
            }
            Node::Leaf { value } => {
                if value.len() != class_count {
                    return Err(invalid(
                        node_index,
                        format!("leaf has {} weights, expected {class_count}", value.len()),
                    ));
                }
                if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(invalid(
                        node_index,
                        "leaf weights must be finite and non-negative".to_string(),
                    ));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stump(feature: usize, threshold: f64, left: [f64; 2], right: [f64; 2]) -> serde_json::Value {
        json!({
            "nodes": [
                { "feature": feature, "threshold": threshold, "left": 1, "right": 2 },
                { "value": left },
                { "value": right }
            ]
        })
    }

    fn model(trees: Vec<serde_json::Value>) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "name": "test",
            "feature_count": FEATURE_COUNT,
            "classes": [0, 2],
            "trees": trees
        }))
        .unwrap()
    }

    fn row_with(feature: usize, value: f64) -> FeatureRow {
        let mut row = [0.0; FEATURE_COUNT];
        row[feature] = value;
        row
    }

    #[test]
    fn test_single_stump() {
        let ensemble =
            TreeEnsemble::from_json(&model(vec![stump(5, 0.5, [1.0, 0.0], [0.0, 1.0])])).unwrap();

        let predictions = ensemble
            .predict(&[row_with(5, 0.0), row_with(5, 1.0), row_with(5, 0.5)])
            .unwrap();

        assert_eq!(predictions, vec![0, 2, 0]);
    }

    #[test]
    fn test_distributions_are_averaged() {
        // Tree 1 is confident about class 2, tree 2 mildly prefers class 0.
        let ensemble = TreeEnsemble::from_json(&model(vec![
            stump(0, 10.0, [0.0, 5.0], [0.0, 5.0]),
            stump(0, 10.0, [60.0, 40.0], [60.0, 40.0]),
        ]))
        .unwrap();

        assert_eq!(ensemble.predict(&[[0.0; FEATURE_COUNT]]).unwrap(), vec![2]);
    }

    #[test]
    fn test_tie_picks_first_class() {
        let ensemble =
            TreeEnsemble::from_json(&model(vec![stump(0, 0.0, [1.0, 1.0], [1.0, 1.0])])).unwrap();

        assert_eq!(ensemble.predict(&[[0.0; FEATURE_COUNT]]).unwrap(), vec![0]);
    }

    #[test]
    fn test_negative_sentinel_goes_left() {
        let ensemble =
            TreeEnsemble::from_json(&model(vec![stump(18, -0.5, [0.0, 1.0], [1.0, 0.0])])).unwrap();

        assert_eq!(ensemble.predict(&[row_with(18, -1.0)]).unwrap(), vec![2]);
        assert_eq!(ensemble.predict(&[row_with(18, 3.0)]).unwrap(), vec![0]);
    }

    #[test]
    fn test_empty_batch() {
        let ensemble =
            TreeEnsemble::from_json(&model(vec![stump(0, 0.0, [1.0, 0.0], [0.0, 1.0])])).unwrap();
        assert!(ensemble.predict(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_summary_fingerprint_is_stable() {
        let bytes = model(vec![stump(0, 0.0, [1.0, 0.0], [0.0, 1.0])]);
        let a = TreeEnsemble::from_json(&bytes).unwrap().summary();
        let b = TreeEnsemble::from_json(&bytes).unwrap().summary();

        assert_eq!(a.name, "test");
        assert_eq!(a.trees, 1);
        assert_eq!(a.classes, vec![0, 2]);
        assert_eq!(a.fingerprint.len(), 64);
        assert_eq!(a.fingerprint, b.fingerprint);
    }

    #[test]
    fn test_rejects_wrong_feature_count() {
        let bytes = serde_json::to_vec(&json!({
            "name": "bad",
            "feature_count": 18,
            "classes": [0],
            "trees": [{ "nodes": [{ "value": [1.0] }] }]
        }))
        .unwrap();

        assert!(matches!(
            TreeEnsemble::from_json(&bytes),
            Err(ModelError::FeatureCountMismatch {
                expected: 19,
                found: 18
            })
        ));
    }

    #[test]
    fn test_rejects_empty_model() {
        let bytes = serde_json::to_vec(&json!({
            "name": "empty", "feature_count": FEATURE_COUNT, "classes": [0], "trees": []
        }))
        .unwrap();
        assert!(matches!(
            TreeEnsemble::from_json(&bytes),
            Err(ModelError::NoTrees)
        ));

        let bytes = serde_json::to_vec(&json!({
            "name": "empty", "feature_count": FEATURE_COUNT, "classes": [], "trees": []
        }))
        .unwrap();
        assert!(matches!(
            TreeEnsemble::from_json(&bytes),
            Err(ModelError::NoClasses)
        ));
    }

    #[test]
    fn test_rejects_backward_child() {
        let tree = json!({
            "nodes": [
                { "feature": 0, "threshold": 1.0, "left": 1, "right": 2 },
                { "feature": 0, "threshold": 1.0, "left": 0, "right": 2 },
                { "value": [1.0, 0.0] }
            ]
        });

        assert!(matches!(
            TreeEnsemble::from_json(&model(vec![tree])),
            Err(ModelError::InvalidNode { tree: 0, node: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_feature() {
        assert!(matches!(
            TreeEnsemble::from_json(&model(vec![stump(19, 0.0, [1.0, 0.0], [0.0, 1.0])])),
            Err(ModelError::InvalidNode { node: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_leaf_width_mismatch() {
        let tree = json!({ "nodes": [{ "value": [1.0, 0.0, 0.0] }] });

        assert!(matches!(
            TreeEnsemble::from_json(&model(vec![tree])),
            Err(ModelError::InvalidNode { node: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            TreeEnsemble::from_json(b"{ not json"),
            Err(ModelError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            TreeEnsemble::load("/nonexistent/model.json"),
            Err(ModelError::Io { .. })
        ));
    }
}
