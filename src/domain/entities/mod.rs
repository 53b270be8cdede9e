//! Core domain entities.
//!
//! - [`ShortLink`] - A stored code → URL mapping
//! - [`NewLink`] - Input for inserting a mapping; the store assigns `created_at`

pub mod link;

pub use link::{NewLink, ShortLink};
