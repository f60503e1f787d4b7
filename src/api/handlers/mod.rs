//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod features;
pub mod health;
pub mod predict;

pub use features::features_handler;
pub use health::health_handler;
pub use predict::{batch_predict_handler, predict_handler};
