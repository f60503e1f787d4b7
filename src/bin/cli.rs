//! Command-line inspection tool for url-classifier.
//!
//! Runs the same pipeline as the HTTP service without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Show the normalized URL and all 19 feature values
//! cargo run --bin url-classifier-cli -- features "http://www.paypal-login.bit.ly/update?id=1"
//!
//! # Classify a URL with a model file
//! cargo run --bin url-classifier-cli -- predict "example.com" --model models/sample_model.json
//!
//! # Validate a model file and print its summary
//! cargo run --bin url-classifier-cli -- model --model models/sample_model.json
//! ```
//!
//! When the URL argument is omitted, the tool prompts for it.

use url_classifier::config::DEFAULT_MODEL_PATH;
use url_classifier::domain::features::assemble;
use url_classifier::domain::label::PredictionLabel;
use url_classifier::domain::normalizer::normalize;
use url_classifier::prelude::{ClassificationService, Classifier, TreeEnsemble};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for inspecting URL features and predictions.
#[derive(Parser)]
#[command(name = "url-classifier-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the feature vector of a URL
    Features {
        /// URL to inspect (prompted for when omitted)
        url: Option<String>,
    },

    /// Classify a URL
    Predict {
        /// URL to classify (prompted for when omitted)
        url: Option<String>,

        /// Model file
        #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
        model: String,
    },

    /// Validate a model file
    Model {
        /// Model file
        #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
        model: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Features { url } => show_features(&resolve_url(url)?),
        Commands::Predict { url, model } => predict(&resolve_url(url)?, &model)?,
        Commands::Model { model } => show_model(&model)?,
    }

    Ok(())
}

/// Uses the given URL or asks for one interactively.
fn resolve_url(url: Option<String>) -> Result<String> {
    match url {
        Some(url) => Ok(url),
        None => Input::new()
            .with_prompt("URL")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read URL"),
    }
}

fn show_features(raw_url: &str) {
    let normalized = normalize(raw_url);
    let vector = assemble(&normalized);

    println!("{}", "🔎 URL Features".bright_blue().bold());
    println!();
    println!("  {} {}", "Input:".bold(), raw_url);
    println!("  {} {}", "Normalized:".bold(), normalized.as_str().cyan());
    println!();

    for (feature, value) in vector.iter() {
        let value = if value == -1 {
            value.to_string().yellow()
        } else if value == 0 {
            value.to_string().dimmed()
        } else {
            value.to_string().green()
        };
        println!("  {:>2}  {:<20} {}", feature.index(), feature.name(), value);
    }
}

fn predict(raw_url: &str, model_path: &str) -> Result<()> {
    let model = load_model(model_path)?;
    let classifier: Arc<dyn Classifier> = Arc::new(model);
    let service = ClassificationService::new(classifier);

    let classification = service.classify(raw_url)?;

    let label = classification.label.as_str();
    let colored_label = match classification.label {
        PredictionLabel::Safe => label.green().bold(),
        PredictionLabel::Defacement => label.yellow().bold(),
        PredictionLabel::Phishing | PredictionLabel::Malware => label.red().bold(),
        PredictionLabel::Undefined => label.dimmed(),
    };

    println!("{} {}", "URL:".bold(), classification.normalized_url);
    println!("{} {}", "Prediction:".bold(), colored_label);
    println!(
        "{} {}",
        "Class index:".bold(),
        classification.class_index.to_string().dimmed()
    );

    Ok(())
}

fn show_model(model_path: &str) -> Result<()> {
    let summary = load_model(model_path)?.summary();

    println!("{}", "✅ Model is valid".green().bold());
    println!();
    println!("  {} {}", "Name:".bold(), summary.name);
    println!("  {} {}", "Trees:".bold(), summary.trees);
    println!("  {} {:?}", "Classes:".bold(), summary.classes);
    println!("  {} {}", "SHA-256:".bold(), summary.fingerprint.dimmed());

    Ok(())
}

fn load_model(model_path: &str) -> Result<TreeEnsemble> {
    TreeEnsemble::load(model_path).with_context(|| format!("Failed to load model from {model_path}"))
}
