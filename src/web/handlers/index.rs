//! URL submission page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the URL submission page.
///
/// Renders `templates/index.html` with:
/// - URL input form posting JSON to `/predict`
/// - Result area for the returned label
/// - Loaded model name and service version in the footer
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub model_name: String,
    pub version: &'static str,
}

/// Renders the URL submission page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        model_name: state.model.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    }
}
