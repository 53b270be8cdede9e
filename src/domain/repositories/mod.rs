//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - The code ↔ URL mapping store
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::{LinkRepository, StoreError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
