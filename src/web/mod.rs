//! Web layer for browser-based UI.
//!
//! Serves the URL submission page. Uses Askama templates for server-side
//! rendering; the page itself calls `POST /predict`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
