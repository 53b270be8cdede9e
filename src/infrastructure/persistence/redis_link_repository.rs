//! Redis implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// Writes both keys of a mapping, or neither.
///
/// KEYS[1] = code hash, KEYS[2] = url key.
/// ARGV[1] = url, ARGV[2] = created_at (RFC 3339), ARGV[3] = code.
/// Returns 1 on insert, 0 if either key exists.
static INSERT_LINK: LazyLock<Script> = LazyLock::new(|| {
    Script::new(
        r#"
        if redis.call('EXISTS', KEYS[1]) == 1 or redis.call('EXISTS', KEYS[2]) == 1 then
            return 0
        end
        redis.call('HSET', KEYS[1], 'url', ARGV[1], 'created_at', ARGV[2])
        redis.call('SET', KEYS[2], ARGV[3])
        return 1
        "#,
    )
});

/// Redis-backed link repository.
///
/// Layout:
/// - `<prefix>code:<code>` - hash with `url` and `created_at`
/// - `<prefix>url:<sha256(url)>` - the code, for idempotent re-shortening
///
/// Inserts run as one Lua script, which Redis executes atomically.
pub struct RedisLinkRepository {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis store");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis store");

        Ok(Self {
            conn: manager,
            key_prefix: key_prefix.to_string(),
        })
    }

    fn code_key(&self, code: &str) -> String {
        format!("{}code:{}", self.key_prefix, code)
    }

    fn url_key(&self, url: &str) -> String {
        url_key(&self.key_prefix, url)
    }
}

fn url_key(prefix: &str, url: &str) -> String {
    format!("{}url:{}", prefix, hex::encode(Sha256::digest(url.as_bytes())))
}

fn link_from_hash(code: &str, mut fields: HashMap<String, String>) -> Option<ShortLink> {
    let url = fields.remove("url")?;
    let created_at = fields
        .get("created_at")
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|| {
            warn!(code, "Stored link has no valid created_at");
            DateTime::<Utc>::UNIX_EPOCH
        });

    Some(ShortLink::new(code.to_string(), url, created_at))
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn put(&self, new_link: NewLink) -> Result<ShortLink, StoreError> {
        let mut conn = self.conn.clone();
        let created_at = Utc::now();

        let inserted: i32 = INSERT_LINK
            .key(self.code_key(&new_link.code))
            .key(self.url_key(&new_link.original_url))
            .arg(&new_link.original_url)
            .arg(created_at.to_rfc3339())
            .arg(&new_link.code)
            .invoke_async(&mut conn)
            .await?;

        if inserted == 0 {
            debug!(code = %new_link.code, "Redis insert rejected, key exists");
            return Err(StoreError::AlreadyExists);
        }

        Ok(new_link.into_link(created_at))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        let mut conn = self.conn.clone();
        let fields: HashMap<String, String> = conn.hgetall(self.code_key(code)).await?;

        if fields.is_empty() {
            return Ok(None);
        }

        Ok(link_from_hash(code, fields))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, StoreError> {
        let mut conn = self.conn.clone();
        let code: Option<String> = conn.get(self.url_key(url)).await?;

        match code {
            Some(code) => self.find_by_code(&code).await,
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
