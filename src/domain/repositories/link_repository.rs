//! Repository trait for the code ↔ URL mapping store.

use crate::domain::entities::{NewLink, ShortLink};
use async_trait::async_trait;

/// Errors returned by mapping store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The code, or the URL, is already mapped. Nothing was written.
    #[error("mapping already exists")]
    AlreadyExists,

    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Associative store of short links, keyed both by code and by URL.
///
/// # Atomicity
///
/// [`put`](LinkRepository::put) is a compare-and-insert: when several callers
/// race to insert the same code, at most one succeeds and the others get
/// [`StoreError::AlreadyExists`]. The same holds for the URL key, so a URL is
/// never mapped to two codes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - sharded in-process maps
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the code or the URL is already
    /// mapped, [`StoreError::Unavailable`] on backend failures.
    async fn put(&self, new_link: NewLink) -> Result<ShortLink, StoreError>;

    /// Finds a mapping by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError>;

    /// Finds the mapping of a previously shortened URL.
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, StoreError>;

    /// Reports whether the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Backend name used in logs and health output.
    fn backend_name(&self) -> &'static str;
}
