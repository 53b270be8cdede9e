//! DTOs for the shorten and lookup endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A short link as returned by `POST /shorten` and `GET /shorten/{url}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn from_link(link: ShortLink, short_url: String) -> Self {
        Self {
            code: link.code,
            short_url,
            long_url: link.original_url,
            created_at: link.created_at,
        }
    }
}
