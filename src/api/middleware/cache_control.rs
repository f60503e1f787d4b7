//! Response cache hardening.

use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

/// Marks every response `Cache-Control: no-store`.
///
/// Predictions depend on the submitted URL and the loaded model; neither
/// browsers nor intermediaries may reuse them. Overrides any value a handler
/// set.
pub fn layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
}
