//! Standard scaler artifact

use super::FeatureTransform;
use crate::error::{DiariskError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Z-score scaler fit offline on the full training feature frame:
/// (x - mean) / scale per column, applied to the whole 17-column vector,
/// indicator columns included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if mean.len() != scale.len() {
            return Err(DiariskError::ShapeError {
                expected: format!("{} scale entries", mean.len()),
                actual: format!("{} scale entries", scale.len()),
            });
        }
        Ok(Self { mean, scale })
    }

    /// Load a fitted scaler from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DiariskError::ArtifactError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| DiariskError::ArtifactError(format!("{}: {}", path.display(), e)))
    }

    /// Save the scaler to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl FeatureTransform for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        if x.len() != self.mean.len() {
            return Err(DiariskError::ShapeError {
                expected: format!("{} columns", self.mean.len()),
                actual: format!("{} columns", x.len()),
            });
        }

        Ok(x.iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&v, (&m, &s))| (v - m) / s)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_transform_zscore() {
        let scaler = StandardScaler::new(vec![1.0, 10.0], vec![2.0, 5.0]).unwrap();
        let scaled = scaler.transform(&array![3.0, 0.0]).unwrap();
        assert_eq!(scaled, array![1.0, -2.0]);
    }

    #[test]
    fn test_transform_width_mismatch() {
        let scaler = StandardScaler::new(vec![0.0; 17], vec![1.0; 17]).unwrap();
        let err = scaler.transform(&array![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, DiariskError::ShapeError { .. }));
    }

    #[test]
    fn test_new_rejects_uneven_params() {
        let err = StandardScaler::new(vec![0.0; 17], vec![1.0; 16]).unwrap_err();
        assert!(matches!(err, DiariskError::ShapeError { .. }));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");

        let scaler = StandardScaler::new(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        scaler.save(&path).unwrap();

        let restored = StandardScaler::load(&path).unwrap();
        assert_eq!(restored.n_features(), 2);

        let x = array![4.0, 10.0];
        assert_eq!(scaler.transform(&x).unwrap(), restored.transform(&x).unwrap());
    }
}
