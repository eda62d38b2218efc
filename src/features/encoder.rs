//! One-hot encoding and feature vector assembly

use super::{DerivedCategories, FeatureVector, RawInput};

/// Merge the eight raw measurements with the encoded categories into the
/// fixed-order model input.
///
/// Indicator columns for categories other than the observed one per axis are
/// 0 rather than omitted; that is the steady state for single-row encoding,
/// not an error path. Pure function of its inputs.
pub fn assemble(raw: &RawInput, categories: &DerivedCategories) -> FeatureVector {
    let bmi = categories.bmi.indicators();
    let insulin = categories.insulin.indicators();
    let glucose = categories.glucose.indicators();

    FeatureVector::new([
        raw.pregnancies,
        raw.glucose,
        raw.blood_pressure,
        raw.skin_thickness,
        raw.insulin,
        raw.bmi,
        raw.diabetes_pedigree_function,
        raw.age,
        bmi[0],
        bmi[1],
        bmi[2],
        bmi[3],
        bmi[4],
        insulin[0],
        glucose[0],
        glucose[1],
        glucose[2],
    ])
}
