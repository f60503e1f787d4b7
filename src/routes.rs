//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`         - URL submission page
//! - `POST /predict`  - Classify one URL
//! - `GET  /health`   - Health check: canary classification
//! - `/api/*`         - Feature extraction and batch prediction
//!
//! # Middleware
//!
//! - **Cache-Control** - `no-store` on every response
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, predict_handler};
use crate::api::middleware::{cache_control, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and handlers without transport middleware.
///
/// Used directly by tests, which have no peer address for rate limiting.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/predict", post(predict_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let router = routes(state);

    let router = if behind_proxy {
        router.layer(rate_limit::proxy_layer())
    } else {
        router.layer(rate_limit::layer())
    };

    let router = router
        .layer(cache_control::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
