//! Domain layer containing business entities and store contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define the contracts that the storage backends in
//! [`crate::infrastructure::persistence`] implement.
//!
//! - [`entities`] - Core data structures ([`entities::ShortLink`])
//! - [`repositories`] - The mapping store contract ([`repositories::LinkRepository`])

pub mod entities;
pub mod repositories;
