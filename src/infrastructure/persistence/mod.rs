//! Mapping store backends.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - Sharded in-process maps, lost on restart
//! - [`PgLinkRepository`] - PostgreSQL via SQLx
//! - [`RedisLinkRepository`] - Redis, with Lua-scripted atomic inserts

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod redis_link_repository;
pub mod store_error;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
pub use redis_link_repository::RedisLinkRepository;
