//! Application layer services implementing the classification workflow.
//!
//! Services orchestrate domain operations and provide a clean API for HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::classification_service::ClassificationService`] - Feature extraction and prediction

pub mod services;
