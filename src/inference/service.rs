//! Prediction service holding the loaded artifacts

use super::PredictionResult;
use crate::artifacts::{
    self, FeatureTransform, GradientBoostingClassifier, ProbabilisticClassifier, StandardScaler,
};
use crate::error::{DiariskError, Result};
use crate::features::{assemble, derive_categories, RawInput, FEATURE_COLUMNS};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Binary classification threshold on the positive-class probability
const CLASSIFICATION_THRESHOLD: f64 = 0.5;

/// Loaded scaler + classifier pair, constructed once at startup and shared
/// read-only across requests. No global mutable state, no per-request state.
#[derive(Debug)]
pub struct PredictionService {
    scaler: Arc<StandardScaler>,
    model: Arc<GradientBoostingClassifier>,
}

impl PredictionService {
    /// Load both artifacts from `dir` and validate their fitted width
    /// against the feature schema.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let scaler = artifacts::load_scaler(dir)?;
        let model = artifacts::load_model(dir)?;

        let service = Self::new(scaler, model)?;
        info!(
            dir = %dir.display(),
            n_trees = service.model.n_trees(),
            "prediction service ready"
        );
        Ok(service)
    }

    /// Build a service from already-loaded artifacts.
    ///
    /// A width mismatch against `FEATURE_COLUMNS` surfaces here as a
    /// configuration error instead of silently corrupting every prediction.
    pub fn new(scaler: StandardScaler, model: GradientBoostingClassifier) -> Result<Self> {
        let expected = FEATURE_COLUMNS.len();
        for (artifact, width) in [("scaler", scaler.n_features()), ("model", model.n_features())] {
            if width != expected {
                return Err(DiariskError::ShapeError {
                    expected: format!("{} fit on {} columns", artifact, expected),
                    actual: format!("{} columns", width),
                });
            }
        }

        Ok(Self {
            scaler: Arc::new(scaler),
            model: Arc::new(model),
        })
    }

    /// Run the full pipeline for one set of raw measurements
    pub fn predict(&self, raw: &RawInput) -> Result<PredictionResult> {
        let categories = derive_categories(raw.bmi, raw.insulin, raw.glucose);
        debug!(?categories, "derived feature bands");

        let vector = assemble(raw, &categories);
        let scaled = self.scaler.transform(&vector.to_array())?;
        let probability = self.model.predict_proba(&scaled)?;
        let label = i64::from(probability >= CLASSIFICATION_THRESHOLD);

        Ok(PredictionResult { label, probability })
    }

    /// Map-keyed boundary used by front ends: `values` must contain the
    /// eight raw measurement keys.
    pub fn predict_values(&self, values: &HashMap<String, f64>) -> Result<PredictionResult> {
        let raw = RawInput::from_map(values)?;
        self.predict(&raw)
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn model(&self) -> &GradientBoostingClassifier {
        &self.model
    }
}
