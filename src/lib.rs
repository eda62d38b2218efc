//! diarisk - Diabetes risk inference pipeline
//!
//! This crate wraps a pre-trained binary classifier behind a typed
//! single-sample pipeline:
//! - [`features`] - threshold banding, one-hot encoding, and assembly of the
//!   fixed 17-column feature vector
//! - [`artifacts`] - loading the fitted scaler and gradient-boosted
//!   classifier from their fixed storage locations
//! - [`inference`] - the prediction service, result type, and risk tiers
//! - [`cli`] - command-line front end
//!
//! The pipeline is stateless: both artifacts are loaded once into a
//! [`inference::PredictionService`] and shared read-only across requests.

// Core error handling
pub mod error;

// Feature pipeline
pub mod features;

// Trained artifacts
pub mod artifacts;

// Inference
pub mod inference;

// Services
pub mod cli;

pub use error::{DiariskError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{DiariskError, Result};

    // Feature pipeline
    pub use crate::features::{
        assemble, derive_categories, BmiCategory, DerivedCategories, FeatureVector,
        GlucoseCategory, InsulinCategory, RawInput, FEATURE_COLUMNS, RAW_COLUMNS,
    };

    // Artifacts
    pub use crate::artifacts::{
        load_model, load_scaler, FeatureTransform, GradientBoostingClassifier,
        ProbabilisticClassifier, StandardScaler,
    };

    // Inference
    pub use crate::inference::{PredictionResult, PredictionService, RiskTier};
}
