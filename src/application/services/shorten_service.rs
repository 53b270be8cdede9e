//! Link creation and lookup service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved};
use crate::utils::url_normalizer::{normalize_url, validate_url};

/// Default number of codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for creating and looking up short links.
///
/// Shortening is idempotent: a URL that is already mapped gets its existing
/// code back. New codes come from the [`CodeGenerator`]; a collision in the
/// store triggers a retry with a fresh code, never an overwrite.
pub struct ShortenService {
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
    normalize_urls: bool,
    max_attempts: usize,
}

impl ShortenService {
    /// Creates a new shorten service.
    ///
    /// `base_url` prefixes the short URLs returned to clients.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            normalize_urls: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Store canonicalized URLs instead of the input as given.
    pub fn with_normalization(mut self, enabled: bool) -> Self {
        self.normalize_urls = enabled;
        self
    }

    /// Sets the number of codes tried before failing; at least one.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Shortens a URL, returning the existing link if it was shortened before.
    ///
    /// # Flow
    ///
    /// 1. Validate (and optionally normalize) the URL
    /// 2. Return the existing mapping if there is one
    /// 3. Otherwise generate a code and insert, retrying on collision
    ///
    /// If an insert is rejected because a concurrent request stored the same
    /// URL first, that request's link is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed.
    /// Returns [`AppError::StoreUnavailable`] if the store fails or every
    /// attempt collided.
    pub async fn shorten(&self, url: &str) -> Result<ShortLink, AppError> {
        let url = self.prepare_url(url)?;

        if let Some(existing) = self.repository.find_by_url(&url).await? {
            debug!(code = %existing.code, "URL already shortened");
            metrics::counter!("shortener_links_reused_total").increment(1);
            return Ok(existing);
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if is_reserved(&code) {
                debug!(attempt, code = %code, "Generated reserved code, retrying");
                continue;
            }

            match self.repository.put(NewLink::new(code, url.clone())).await {
                Ok(link) => {
                    info!(code = %link.code, attempt, "Short link created");
                    metrics::counter!("shortener_links_created_total").increment(1);
                    return Ok(link);
                }
                Err(StoreError::AlreadyExists) => {
                    if let Some(existing) = self.repository.find_by_url(&url).await? {
                        debug!(code = %existing.code, "Concurrent request stored URL first");
                        metrics::counter!("shortener_links_reused_total").increment(1);
                        return Ok(existing);
                    }

                    debug!(attempt, "Code collision, retrying");
                    metrics::counter!("shortener_code_collisions_total").increment(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(
            attempts = self.max_attempts,
            "Failed to generate a unique code"
        );
        Err(AppError::store_unavailable(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Looks up the link of a previously shortened URL without creating one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed,
    /// [`AppError::NotFound`] if it was never shortened.
    pub async fn lookup(&self, url: &str) -> Result<ShortLink, AppError> {
        let url = self.prepare_url(url)?;

        self.repository
            .find_by_url(&url)
            .await?
            .ok_or_else(|| AppError::not_found("URL has not been shortened", json!({ "url": url })))
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    fn prepare_url(&self, url: &str) -> Result<String, AppError> {
        let prepared = if self.normalize_urls {
            normalize_url(url)
        } else {
            validate_url(url)
        };

        prepared.map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })
    }
}
