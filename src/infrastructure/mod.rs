//! Infrastructure layer for external integrations.
//!
//! Provides the concrete mapping store backends behind
//! [`crate::domain::repositories::LinkRepository`].
//!
//! - [`persistence`] - In-memory, PostgreSQL and Redis repositories

pub mod persistence;
