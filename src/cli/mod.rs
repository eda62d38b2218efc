//! diarisk CLI Module
//!
//! Command-line front end over the prediction service.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use crate::artifacts::{FeatureTransform, ProbabilisticClassifier};
use crate::features::RawInput;
use crate::inference::{PredictionService, RiskTier};

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString {
    s.truecolor(100, 100, 100)
}
fn muted(s: &str) -> ColoredString {
    s.truecolor(140, 140, 140)
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

fn kv(key: &str, val: &str) {
    println!("  {} {}", muted(key), val.white());
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "diarisk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Diabetes risk prediction from eight health measurements")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict diabetes risk for one set of measurements
    Predict {
        /// Number of pregnancies
        #[arg(long, default_value = "1")]
        pregnancies: f64,

        /// Glucose level (mg/dL)
        #[arg(long, default_value = "120")]
        glucose: f64,

        /// Blood pressure (mmHg)
        #[arg(long, default_value = "70")]
        blood_pressure: f64,

        /// Skin thickness (mm)
        #[arg(long, default_value = "20")]
        skin_thickness: f64,

        /// Insulin level (µU/mL)
        #[arg(long, default_value = "100")]
        insulin: f64,

        /// Body mass index
        #[arg(long, default_value = "28.0")]
        bmi: f64,

        /// Diabetes pedigree function
        #[arg(long, default_value = "0.5")]
        pedigree: f64,

        /// Age (years)
        #[arg(long, default_value = "35")]
        age: f64,

        /// Directory holding scaler.json and model.json
        #[arg(long, default_value = "models")]
        models_dir: PathBuf,
    },

    /// Show information about the loaded artifacts
    Info {
        /// Directory holding scaler.json and model.json
        #[arg(long, default_value = "models")]
        models_dir: PathBuf,
    },
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_predict(raw: &RawInput, models_dir: &Path) -> anyhow::Result<()> {
    let service = PredictionService::load(models_dir)?;
    let result = service.predict(raw)?;

    let tier = result.risk_tier();
    let tier_label = match tier {
        RiskTier::Low => tier.label().green(),
        RiskTier::Moderate => tier.label().yellow(),
        RiskTier::High => tier.label().red(),
    };

    section("Prediction");
    kv("class      ", &result.label.to_string());
    kv(
        "probability",
        &format!("{:.1}%", result.probability * 100.0),
    );
    println!("  {} {}", muted("risk tier  "), tier_label.bold());
    println!();

    Ok(())
}

pub fn cmd_info(models_dir: &Path) -> anyhow::Result<()> {
    let service = PredictionService::load(models_dir)?;

    section("Artifacts");
    kv("directory  ", &models_dir.display().to_string());
    kv(
        "scaler     ",
        &format!("standard, {} columns", service.scaler().n_features()),
    );
    kv(
        "model      ",
        &format!(
            "gradient boosting, {} trees, {} columns",
            service.model().n_trees(),
            service.model().n_features()
        ),
    );
    println!();

    Ok(())
}
