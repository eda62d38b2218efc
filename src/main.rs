//! diarisk - Main Entry Point
//!
//! Diabetes risk prediction CLI over the typed inference pipeline.

use clap::Parser;
use diarisk::cli::{cmd_info, cmd_predict, Cli, Commands};
use diarisk::features::RawInput;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diarisk=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            pregnancies,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            bmi,
            pedigree,
            age,
            models_dir,
        } => {
            let raw = RawInput {
                pregnancies,
                glucose,
                blood_pressure,
                skin_thickness,
                insulin,
                bmi,
                diabetes_pedigree_function: pedigree,
                age,
            };
            cmd_predict(&raw, &models_dir)?;
        }
        Commands::Info { models_dir } => {
            cmd_info(&models_dir)?;
        }
    }

    Ok(())
}
