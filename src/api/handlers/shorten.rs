//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "6iDv7Ckn2oQ",
///   "short_url": "http://localhost:8000/6iDv7Ckn2oQ",
///   "long_url": "https://example.com/a",
///   "created_at": "2026-10-19T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an unparseable body or an invalid URL.
/// Returns 503 Service Unavailable if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.shorten_service.shorten(&payload.url).await?;
    let short_url = state.shorten_service.short_url(&link.code);

    Ok(Json(ShortenResponse::from_link(link, short_url)))
}
