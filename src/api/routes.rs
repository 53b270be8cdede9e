//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    fallback_handler, health_handler, lookup_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router.
///
/// # Endpoints
///
/// - `POST /shorten`        - Create (or reuse) a short link
/// - `GET  /shorten/{*url}` - Look up the short link of a URL
/// - `GET  /health`         - Store health
/// - `GET  /{code}`         - Redirect to the original URL
///
/// Static routes take precedence over `/{code}`; reserved codes keep the
/// generator from issuing a code that a static route would shadow.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten/{*url}", get(lookup_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}
