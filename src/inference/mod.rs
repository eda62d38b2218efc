//! Single-sample inference
//!
//! Orchestrates the full pipeline for one request: derive categories,
//! assemble the fixed feature vector, scale, classify. Stateless
//! request/response; the loaded artifacts are the only long-lived objects.

mod service;

pub use service::PredictionService;

use serde::{Deserialize, Serialize};

/// Risk tier displayed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Tier cut points used by the front end.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.25 {
            RiskTier::Low
        } else if probability < 0.55 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
        }
    }
}

/// Outcome of one prediction request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class: 1 = diabetic, 0 = non-diabetic
    pub label: i64,
    /// Positive-class probability in [0, 1]
    pub probability: f64,
}

impl PredictionResult {
    pub fn risk_tier(&self) -> RiskTier {
        RiskTier::from_probability(self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tier_cut_points() {
        assert_eq!(RiskTier::from_probability(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.24), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.25), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.54), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.55), RiskTier::High);
        assert_eq!(RiskTier::from_probability(1.0), RiskTier::High);
    }

    #[test]
    fn test_result_tier() {
        let result = PredictionResult {
            label: 1,
            probability: 0.8,
        };
        assert_eq!(result.risk_tier(), RiskTier::High);
        assert_eq!(result.risk_tier().label(), "High Risk");
    }
}
