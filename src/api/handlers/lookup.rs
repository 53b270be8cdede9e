//! Handler for looking up the short link of an already shortened URL.

use axum::{
    Json,
    extract::{Path, RawQuery, State},
};

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short link of a URL without creating one.
///
/// # Endpoint
///
/// `GET /shorten/{url}`
///
/// The target URL is the rest of the path after `/shorten/`, percent-decoded.
/// It may be sent percent-encoded as a single segment
/// (`/shorten/https%3A%2F%2Fexample.com%2Fa`) or raw
/// (`/shorten/https://example.com/a`). A query string on the request belongs
/// to the target URL and is appended to it.
///
/// # Errors
///
/// Returns 404 Not Found if the URL has not been shortened.
/// Returns 400 Bad Request if the URL is invalid.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(url): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<ShortenResponse>, AppError> {
    let target = match query {
        Some(query) if !query.is_empty() => format!("{}?{}", url, query),
        _ => url,
    };

    let link = state.shorten_service.lookup(&target).await?;
    let short_url = state.shorten_service.short_url(&link.code);

    Ok(Json(ShortenResponse::from_link(link, short_url)))
}
