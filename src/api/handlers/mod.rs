//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod fallback;
pub mod health;
pub mod lookup;
pub mod redirect;
pub mod shorten;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use lookup::lookup_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
