//! Feature schema, banding, and vector assembly
//!
//! Defines the raw measurement record, the derived category bands, and the
//! fixed 17-column feature vector the scaler and classifier were fit on.
//! The column order is a static contract: it must match the training-time
//! frame exactly or predictions are numerically wrong.

mod categories;
mod encoder;

pub use categories::{
    derive_categories, BmiCategory, DerivedCategories, GlucoseCategory, InsulinCategory,
};
pub use encoder::assemble;

use crate::error::{DiariskError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw measurement keys accepted at the prediction boundary
pub const RAW_COLUMNS: [&str; 8] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Column order the scaler and classifier were fit on: the eight raw
/// measurements followed by the nine indicator columns (per-axis baselines
/// Underweight, Abnormal, and Low are dropped).
pub const FEATURE_COLUMNS: [&str; 17] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
    "BMI_Normal",
    "BMI_Overweight",
    "BMI_Obesity1",
    "BMI_Obesity2",
    "BMI_Obesity3",
    "Insulin_Normal",
    "Glucose_Normal",
    "Glucose_Prediabetic",
    "Glucose_High",
];

/// One patient's raw measurements
///
/// Created per prediction request and discarded after use. Range checks
/// belong to the presentation boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(rename = "Pregnancies")]
    pub pregnancies: f64,
    #[serde(rename = "Glucose")]
    pub glucose: f64,
    #[serde(rename = "BloodPressure")]
    pub blood_pressure: f64,
    #[serde(rename = "SkinThickness")]
    pub skin_thickness: f64,
    #[serde(rename = "Insulin")]
    pub insulin: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    pub diabetes_pedigree_function: f64,
    #[serde(rename = "Age")]
    pub age: f64,
}

impl RawInput {
    /// Build from a map keyed by the eight `RAW_COLUMNS` names.
    /// A missing key is a schema failure, never silently defaulted.
    pub fn from_map(values: &HashMap<String, f64>) -> Result<Self> {
        let get = |key: &str| {
            values
                .get(key)
                .copied()
                .ok_or_else(|| DiariskError::FeatureNotFound(key.to_string()))
        };

        Ok(Self {
            pregnancies: get("Pregnancies")?,
            glucose: get("Glucose")?,
            blood_pressure: get("BloodPressure")?,
            skin_thickness: get("SkinThickness")?,
            insulin: get("Insulin")?,
            bmi: get("BMI")?,
            diabetes_pedigree_function: get("DiabetesPedigreeFunction")?,
            age: get("Age")?,
        })
    }
}

/// Assembled model input: exactly `FEATURE_COLUMNS.len()` values in
/// `FEATURE_COLUMNS` order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COLUMNS.len()]);

impl FeatureVector {
    /// Number of columns in the fixed schema.
    pub const WIDTH: usize = FEATURE_COLUMNS.len();

    pub(crate) fn new(values: [f64; FEATURE_COLUMNS.len()]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COLUMNS.len()] {
        &self.0
    }

    /// Copy into the numeric backend's vector type.
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_iter(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> HashMap<String, f64> {
        let mut values = HashMap::new();
        values.insert("Pregnancies".to_string(), 1.0);
        values.insert("Glucose".to_string(), 120.0);
        values.insert("BloodPressure".to_string(), 70.0);
        values.insert("SkinThickness".to_string(), 20.0);
        values.insert("Insulin".to_string(), 100.0);
        values.insert("BMI".to_string(), 28.0);
        values.insert("DiabetesPedigreeFunction".to_string(), 0.5);
        values.insert("Age".to_string(), 35.0);
        values
    }

    #[test]
    fn test_from_map() {
        let raw = RawInput::from_map(&sample_map()).unwrap();
        assert_eq!(raw.glucose, 120.0);
        assert_eq!(raw.bmi, 28.0);
    }

    #[test]
    fn test_from_map_missing_key() {
        let mut values = sample_map();
        values.remove("Insulin");
        let err = RawInput::from_map(&values).unwrap_err();
        assert!(matches!(err, DiariskError::FeatureNotFound(ref key) if key == "Insulin"));
    }

    #[test]
    fn test_schema_width() {
        assert_eq!(FEATURE_COLUMNS.len(), 17);
        assert_eq!(FeatureVector::WIDTH, 17);
        assert_eq!(&FEATURE_COLUMNS[..8], &RAW_COLUMNS[..]);
    }

    #[test]
    fn test_raw_input_wire_keys() {
        let raw = RawInput::from_map(&sample_map()).unwrap();
        let json = serde_json::to_value(raw).unwrap();
        for key in RAW_COLUMNS {
            assert!(json.get(key).is_some(), "missing wire key {key}");
        }
    }
}
