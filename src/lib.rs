//! # URL Classifier
//!
//! A lexical URL classification service built with Axum. A submitted URL is
//! labelled `SAFE`, `DEFACEMENT`, `PHISHING` or `MALWARE` from 19 features of
//! its text alone; nothing is ever fetched.
//!
//! ## Architecture
//!
//! The crate follows the same layer separation throughout:
//!
//! - **Domain Layer** ([`domain`]) - Normalization, feature extraction, labels, classifier contract
//! - **Application Layer** ([`application`]) - Classification pipeline orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Tree-ensemble model loading
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML submission page
//!
//! ## Pipeline
//!
//! ```text
//! raw URL -> normalize -> 19 extractors -> feature row -> classifier -> label
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export MODEL_PATH="models/sample_model.json"
//! cargo run
//!
//! curl -s localhost:8888/predict -H 'content-type: application/json' \
//!      -d '{"url": "http://www.paypal-login.bit.ly/update?id=1"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Classification, ClassificationService};
    pub use crate::domain::classifier::{Classifier, ClassifierError};
    pub use crate::domain::features::{FEATURE_COUNT, Feature, FeatureRow, FeatureVector, assemble};
    pub use crate::domain::label::PredictionLabel;
    pub use crate::domain::normalizer::{NormalizedUrl, normalize};
    pub use crate::error::AppError;
    pub use crate::infrastructure::model::{ModelSummary, TreeEnsemble};
    pub use crate::state::AppState;
}
