//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the model is
//! loaded and the server starts.
//!
//! ```bash
//! export MODEL_PATH="models/sample_model.json"
//! export LISTEN="0.0.0.0:8888"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8888`)
//! - `MODEL_PATH` - Tree-ensemble model file (default: `models/sample_model.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from forwarding headers (default: `false`)
//! - `MAX_BATCH_SIZE` - URLs per batch prediction request (default: 100, max: 1000)

use anyhow::Result;
use std::env;

pub const DEFAULT_MODEL_PATH: &str = "models/sample_model.json";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub model_path: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub max_batch_size: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default; unparsable numbers fall back to it.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8888".to_string());
        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let max_batch_size = env::var("MAX_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Ok(Self {
            listen_addr,
            model_path,
            log_level,
            log_format,
            behind_proxy,
            max_batch_size,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `model_path` is empty
    /// - `max_batch_size` is outside `1..=1000`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.model_path.trim().is_empty() {
            anyhow::bail!("MODEL_PATH must not be empty");
        }

        if self.max_batch_size == 0 || self.max_batch_size > 1000 {
            anyhow::bail!(
                "MAX_BATCH_SIZE must be between 1 and 1000, got {}",
                self.max_batch_size
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Model: {}", self.model_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Max batch size: {}", self.max_batch_size);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
