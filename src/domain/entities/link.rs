//! Short link entity representing a code → URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and the original URL.
///
/// Records are immutable once written. The mapping store owns them; everyone
/// else works with clones returned from lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }

    /// Materializes the link with the given creation time.
    pub fn into_link(self, created_at: DateTime<Utc>) -> ShortLink {
        ShortLink::new(self.code, self.original_url, created_at)
    }
}
