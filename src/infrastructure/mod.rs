//! Infrastructure layer: model backends.
//!
//! # Modules
//!
//! - [`model`] - JSON tree-ensemble implementation of the classifier contract

pub mod model;
