//! Trained artifact loading
//!
//! Two opaque fitted objects are read from fixed locations under the models
//! directory: the standard scaler and the gradient-boosted classifier. Both
//! are immutable once loaded and shared read-only across requests. A missing
//! or corrupt file is fatal; there is no retry or fallback.

mod model;
mod scaler;

pub use model::{DecisionTree, GradientBoostingClassifier, TreeNode};
pub use scaler::StandardScaler;

use crate::error::Result;
use ndarray::Array1;
use std::path::Path;

/// Default artifact directory relative to the installation root
pub const DEFAULT_MODELS_DIR: &str = "models";
/// Scaler artifact filename
pub const SCALER_FILE: &str = "scaler.json";
/// Classifier artifact filename
pub const MODEL_FILE: &str = "model.json";

/// Fitted transform applied to an assembled feature vector.
///
/// Narrow capability surface so the concrete numeric backend is swappable
/// without touching the feature code.
pub trait FeatureTransform {
    /// Number of input columns the transform was fit on.
    fn n_features(&self) -> usize;

    /// Transform one feature vector.
    fn transform(&self, x: &Array1<f64>) -> Result<Array1<f64>>;
}

/// Fitted binary classifier producing a positive-class probability.
pub trait ProbabilisticClassifier {
    /// Number of input columns the classifier was fit on.
    fn n_features(&self) -> usize;

    /// Probability of the positive class for one scaled feature vector.
    fn predict_proba(&self, x: &Array1<f64>) -> Result<f64>;
}

/// Load the fitted scaler from `<dir>/scaler.json`.
pub fn load_scaler(dir: impl AsRef<Path>) -> Result<StandardScaler> {
    StandardScaler::load(dir.as_ref().join(SCALER_FILE))
}

/// Load the trained classifier from `<dir>/model.json`.
pub fn load_model(dir: impl AsRef<Path>) -> Result<GradientBoostingClassifier> {
    GradientBoostingClassifier::load(dir.as_ref().join(MODEL_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiariskError;

    #[test]
    fn test_load_scaler_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scaler(dir.path()).unwrap_err();
        assert!(matches!(err, DiariskError::ArtifactError(_)));
    }

    #[test]
    fn test_load_model_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), "not json").unwrap();
        let err = load_model(dir.path()).unwrap_err();
        assert!(matches!(err, DiariskError::ArtifactError(_)));
    }
}
