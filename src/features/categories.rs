//! Threshold banding for derived categorical features
//!
//! Each band function is total over the reals: the first matching band wins
//! and the bands are contiguous, so every input maps to exactly one category.
//! The cut points are the ones the classifier was trained against and must
//! not drift from them.

use serde::{Deserialize, Serialize};

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity1,
    Obesity2,
    Obesity3,
}

impl BmiCategory {
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi <= 24.9 {
            BmiCategory::Normal
        } else if bmi <= 29.9 {
            BmiCategory::Overweight
        } else if bmi <= 34.9 {
            BmiCategory::Obesity1
        } else if bmi <= 39.9 {
            BmiCategory::Obesity2
        } else {
            BmiCategory::Obesity3
        }
    }

    /// Indicator columns in training order, with the Underweight baseline
    /// dropped: [Normal, Overweight, Obesity1, Obesity2, Obesity3].
    pub(crate) fn indicators(self) -> [f64; 5] {
        let mut cols = [0.0; 5];
        match self {
            BmiCategory::Underweight => {}
            BmiCategory::Normal => cols[0] = 1.0,
            BmiCategory::Overweight => cols[1] = 1.0,
            BmiCategory::Obesity1 => cols[2] = 1.0,
            BmiCategory::Obesity2 => cols[3] = 1.0,
            BmiCategory::Obesity3 => cols[4] = 1.0,
        }
        cols
    }
}

/// Insulin band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsulinCategory {
    Abnormal,
    Normal,
}

impl InsulinCategory {
    /// Normal is the inclusive range [16, 166] µU/mL.
    pub fn from_value(insulin: f64) -> Self {
        if (16.0..=166.0).contains(&insulin) {
            InsulinCategory::Normal
        } else {
            InsulinCategory::Abnormal
        }
    }

    /// Single indicator column [Normal]; Abnormal is the dropped baseline.
    pub(crate) fn indicators(self) -> [f64; 1] {
        match self {
            InsulinCategory::Abnormal => [0.0],
            InsulinCategory::Normal => [1.0],
        }
    }
}

/// Glucose band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseCategory {
    Low,
    Normal,
    Prediabetic,
    High,
}

impl GlucoseCategory {
    pub fn from_value(glucose: f64) -> Self {
        if glucose <= 70.0 {
            GlucoseCategory::Low
        } else if glucose <= 99.0 {
            GlucoseCategory::Normal
        } else if glucose <= 125.0 {
            GlucoseCategory::Prediabetic
        } else {
            GlucoseCategory::High
        }
    }

    /// Indicator columns [Normal, Prediabetic, High]; Low is the dropped
    /// baseline.
    pub(crate) fn indicators(self) -> [f64; 3] {
        let mut cols = [0.0; 3];
        match self {
            GlucoseCategory::Low => {}
            GlucoseCategory::Normal => cols[0] = 1.0,
            GlucoseCategory::Prediabetic => cols[1] = 1.0,
            GlucoseCategory::High => cols[2] = 1.0,
        }
        cols
    }
}

/// The three categories derived from one set of raw measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedCategories {
    pub bmi: BmiCategory,
    pub insulin: InsulinCategory,
    pub glucose: GlucoseCategory,
}

/// Band the three engineered inputs. No error conditions.
pub fn derive_categories(bmi: f64, insulin: f64, glucose: f64) -> DerivedCategories {
    DerivedCategories {
        bmi: BmiCategory::from_value(bmi),
        insulin: InsulinCategory::from_value(insulin),
        glucose: GlucoseCategory::from_value(glucose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_band_boundaries() {
        assert_eq!(BmiCategory::from_value(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(24.91), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(34.9), BmiCategory::Obesity1);
        assert_eq!(BmiCategory::from_value(39.9), BmiCategory::Obesity2);
        assert_eq!(BmiCategory::from_value(39.91), BmiCategory::Obesity3);
    }

    #[test]
    fn test_insulin_band_inclusive_bounds() {
        assert_eq!(InsulinCategory::from_value(15.99), InsulinCategory::Abnormal);
        assert_eq!(InsulinCategory::from_value(16.0), InsulinCategory::Normal);
        assert_eq!(InsulinCategory::from_value(166.0), InsulinCategory::Normal);
        assert_eq!(InsulinCategory::from_value(166.01), InsulinCategory::Abnormal);
    }

    #[test]
    fn test_glucose_band_boundaries() {
        assert_eq!(GlucoseCategory::from_value(70.0), GlucoseCategory::Low);
        assert_eq!(GlucoseCategory::from_value(70.01), GlucoseCategory::Normal);
        assert_eq!(GlucoseCategory::from_value(99.0), GlucoseCategory::Normal);
        assert_eq!(GlucoseCategory::from_value(99.01), GlucoseCategory::Prediabetic);
        assert_eq!(GlucoseCategory::from_value(125.0), GlucoseCategory::Prediabetic);
        assert_eq!(GlucoseCategory::from_value(125.01), GlucoseCategory::High);
    }

    #[test]
    fn test_derive_categories() {
        let cats = derive_categories(28.0, 100.0, 120.0);
        assert_eq!(cats.bmi, BmiCategory::Overweight);
        assert_eq!(cats.insulin, InsulinCategory::Normal);
        assert_eq!(cats.glucose, GlucoseCategory::Prediabetic);
    }

    #[test]
    fn test_one_indicator_at_most_per_axis() {
        for bmi in [10.0, 20.0, 27.0, 32.0, 37.0, 45.0] {
            let ones: f64 = BmiCategory::from_value(bmi).indicators().iter().sum();
            assert!(ones <= 1.0);
        }
    }
}
