//! # Shortener Core
//!
//! A URL shortening service built with Axum, backed by an in-memory,
//! PostgreSQL or Redis mapping store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entities and the mapping store contract
//! - **Application Layer** ([`application`]) - Shortening and redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Store backends
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - Shorten a URL (idempotent per URL)
//! - `GET /shorten/{url}` - Look up the short link of a URL
//! - `GET /{code}` - Redirect to the original URL (307 by default, 302 configurable)
//! - `GET /health` - Store health
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8000"
//! export STORE_BACKEND=redis
//! export REDIS_URL="redis://localhost:6379"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectDispatcher, RedirectKind, ShortenService};
    pub use crate::domain::entities::{NewLink, ShortLink};
    pub use crate::domain::repositories::{LinkRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
