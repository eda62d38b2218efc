//! Gradient-boosted classifier artifact
//!
//! Inference-only representation of a tree ensemble fit offline. Probability
//! calibration is baked into the leaf values and initial log odds, so the
//! runtime is a plain forward pass: sum the leaf outputs, apply the sigmoid.

use super::ProbabilisticClassifier;
use crate::error::{DiariskError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One node of a serialized regression tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Regression tree over scaled feature vectors, stored as a flat node
/// arena with index links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// Walk the tree for one row. Values below the threshold go left.
    fn predict_row(&self, x: &Array1<f64>) -> Result<f64> {
        let mut idx = 0;
        loop {
            let node = self.nodes.get(idx).ok_or_else(|| {
                DiariskError::ArtifactError(format!("tree node index {} out of bounds", idx))
            })?;

            match node {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let v = x.get(*feature).copied().ok_or_else(|| {
                        DiariskError::ArtifactError(format!(
                            "tree split on feature {} beyond vector width {}",
                            feature,
                            x.len()
                        ))
                    })?;
                    idx = if v < *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Gradient-boosted binary classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingClassifier {
    trees: Vec<DecisionTree>,
    learning_rate: f64,
    initial_log_odds: f64,
    n_features: usize,
}

impl GradientBoostingClassifier {
    pub fn new(
        trees: Vec<DecisionTree>,
        learning_rate: f64,
        initial_log_odds: f64,
        n_features: usize,
    ) -> Self {
        Self {
            trees,
            learning_rate,
            initial_log_odds,
            n_features,
        }
    }

    /// Number of trees in the ensemble
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Predict the class label for one scaled feature vector
    pub fn predict(&self, x: &Array1<f64>) -> Result<i64> {
        let p = self.predict_proba(x)?;
        Ok(i64::from(p >= 0.5))
    }

    /// Load a trained classifier from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DiariskError::ArtifactError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| DiariskError::ArtifactError(format!("{}: {}", path.display(), e)))
    }

    /// Save the classifier to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl ProbabilisticClassifier for GradientBoostingClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, x: &Array1<f64>) -> Result<f64> {
        if x.len() != self.n_features {
            return Err(DiariskError::ShapeError {
                expected: format!("{} columns", self.n_features),
                actual: format!("{} columns", x.len()),
            });
        }

        let mut log_odds = self.initial_log_odds;
        for tree in &self.trees {
            log_odds += self.learning_rate * tree.predict_row(x)?;
        }

        Ok(1.0 / (1.0 + (-log_odds).exp()))
    }
}
