//! Domain layer: URL feature extraction and prediction labels.
//!
//! Everything here is pure and synchronous. No component keeps state between
//! calls, so the whole layer is safe to use from any number of tasks.
//!
//! # Architecture
//!
//! - [`normalizer`] - Lowercasing and scheme-prefix removal
//! - [`url_parts`] - Generic URI component splitting
//! - [`tld`] - Public-suffix-aware TLD resolution
//! - [`features`] - Feature schema, extractors and vector assembly
//! - [`label`] - Class index to label mapping
//! - [`classifier`] - Contract implemented by model backends
//!
//! # Flow
//!
//! 1. [`normalizer::normalize`] turns the raw input into a [`normalizer::NormalizedUrl`]
//! 2. [`features::assemble`] computes the 19-column [`features::FeatureVector`]
//! 3. A [`classifier::Classifier`] predicts a class index for the vector's row
//! 4. [`label::PredictionLabel::resolve`] maps the index to a label

pub mod classifier;
pub mod features;
pub mod label;
pub mod normalizer;
pub mod tld;
pub mod url_parts;
