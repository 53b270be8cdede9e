//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::application::services::RedirectKind;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::ascii_serialization;

/// Redirect to a stored URL with the configured status.
#[derive(Debug)]
pub struct RedirectResponse {
    kind: RedirectKind,
    location: String,
}

impl RedirectResponse {
    pub fn new(kind: RedirectKind, location: String) -> Self {
        Self { kind, location }
    }

    /// The stored URL when it is a legal header value, otherwise its
    /// canonical ASCII form.
    fn location_header(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.location).ok().or_else(|| {
            ascii_serialization(&self.location).and_then(|ascii| HeaderValue::from_str(&ascii).ok())
        })
    }
}

impl IntoResponse for RedirectResponse {
    fn into_response(self) -> Response {
        match self.location_header() {
            Some(location) => {
                (self.kind.status_code(), [(header::LOCATION, location)]).into_response()
            }
            None => {
                warn!(location = %self.location, "Stored URL is not a valid Location header");
                AppError::internal("Stored URL cannot be used as a redirect target", json!({}))
                    .into_response()
            }
        }
    }
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 307 Temporary Redirect or 302 Found depending on
/// `REDIRECT_STATUS`, with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 503 Service Unavailable if the store fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<RedirectResponse, AppError> {
    let dispatcher = &state.redirect_dispatcher;

    match dispatcher.resolve(&code).await {
        Ok(url) => {
            debug!(code = %code, "Redirecting");
            metrics::counter!("shortener_redirects_total").increment(1);
            Ok(RedirectResponse::new(dispatcher.kind(), url))
        }
        Err(e) => {
            if matches!(e, AppError::NotFound { .. }) {
                metrics::counter!("shortener_redirects_not_found_total").increment(1);
            }
            Err(e)
        }
    }
}
