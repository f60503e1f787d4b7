//! HTTP server initialization and runtime setup.
//!
//! Loads the model, builds shared state, and runs the Axum server until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::domain::classifier::Classifier;
use crate::infrastructure::model::TreeEnsemble;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Tree-ensemble model (loaded once, shared read-only)
/// - Application state
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The model file cannot be loaded or is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let model = TreeEnsemble::load(&config.model_path)
        .with_context(|| format!("Failed to load model from {}", config.model_path))?;
    let summary = model.summary();
    tracing::info!(
        name = %summary.name,
        trees = summary.trees,
        fingerprint = %summary.fingerprint,
        "Model loaded"
    );

    let classifier: Arc<dyn Classifier> = Arc::new(model);
    let state = AppState::new(classifier, summary, config.max_batch_size);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
