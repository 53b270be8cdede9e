//! Short code resolution for redirects.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tracing::debug;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed;

/// Status code used for redirects, selected with `REDIRECT_STATUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectKind {
    /// 302 Found.
    Found,
    /// 307 Temporary Redirect; keeps the request method.
    #[default]
    Temporary,
}

impl RedirectKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            RedirectKind::Found => StatusCode::FOUND,
            RedirectKind::Temporary => StatusCode::TEMPORARY_REDIRECT,
        }
    }
}

impl FromStr for RedirectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "302" | "found" => Ok(RedirectKind::Found),
            "307" | "temporary" => Ok(RedirectKind::Temporary),
            other => Err(format!(
                "unsupported redirect status '{}', expected 302 or 307",
                other
            )),
        }
    }
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_code().as_u16())
    }
}

/// Resolves short codes to their original URLs.
pub struct RedirectDispatcher {
    repository: Arc<dyn LinkRepository>,
    kind: RedirectKind,
}

impl RedirectDispatcher {
    pub fn new(repository: Arc<dyn LinkRepository>, kind: RedirectKind) -> Self {
        Self { repository, kind }
    }

    /// Redirect status this dispatcher issues.
    pub fn kind(&self) -> RedirectKind {
        self.kind
    }

    /// Returns the original URL for a code.
    ///
    /// Codes that cannot have been issued are rejected without a store lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::StoreUnavailable`] if the store fails.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if !is_well_formed(code) {
            debug!(code, "Rejected malformed code");
            return Err(Self::not_found(code));
        }

        match self.repository.find_by_code(code).await? {
            Some(link) => Ok(link.original_url),
            None => Err(Self::not_found(code)),
        }
    }

    fn not_found(code: &str) -> AppError {
        AppError::not_found("Short link not found", json!({ "code": code }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortLink;
    use crate::domain::repositories::{MockLinkRepository, StoreError};
    use chrono::Utc;

    #[tokio::test]
    async fn test_resolve_known_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| {
                Ok(Some(ShortLink::new(
                    code.to_string(),
                    "https://example.com/a".to_string(),
                    Utc::now(),
                )))
            });

        let dispatcher = RedirectDispatcher::new(Arc::new(repo), RedirectKind::Temporary);
        assert_eq!(
            dispatcher.resolve("abc123").await.unwrap(),
            "https://example.com/a"
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let dispatcher = RedirectDispatcher::new(Arc::new(repo), RedirectKind::Found);
        assert!(matches!(
            dispatcher.resolve("doesnotexist").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_store() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(0);

        let dispatcher = RedirectDispatcher::new(Arc::new(repo), RedirectKind::Temporary);
        assert!(matches!(
            dispatcher.resolve("bad.code").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_store_failure() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(|_| Err(StoreError::Unavailable("timeout".to_string())));

        let dispatcher = RedirectDispatcher::new(Arc::new(repo), RedirectKind::Temporary);
        assert!(matches!(
            dispatcher.resolve("abc123").await,
            Err(AppError::StoreUnavailable { .. })
        ));
    }

    #[test]
    fn test_redirect_kind_parsing() {
        assert_eq!("302".parse::<RedirectKind>(), Ok(RedirectKind::Found));
        assert_eq!("307".parse::<RedirectKind>(), Ok(RedirectKind::Temporary));
        assert_eq!("Found".parse::<RedirectKind>(), Ok(RedirectKind::Found));
        assert!("301".parse::<RedirectKind>().is_err());
    }

    #[test]
    fn test_redirect_kind_status() {
        assert_eq!(RedirectKind::Found.status_code(), StatusCode::FOUND);
        assert_eq!(
            RedirectKind::Temporary.status_code(),
            StatusCode::TEMPORARY_REDIRECT
        );
        assert_eq!(RedirectKind::default(), RedirectKind::Temporary);
        assert_eq!(RedirectKind::Found.to_string(), "302");
    }
}
