//! Application layer services implementing business logic.
//!
//! Services consume the repository and generator traits and provide the API
//! that HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short link creation and URL lookup
//! - [`services::redirect_service::RedirectDispatcher`] - Code resolution for redirects

pub mod services;
