//! In-process implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::entities::{NewLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// Link repository backed by two sharded concurrent maps.
///
/// Locks are per shard, so reads and writes on unrelated keys do not block
/// each other. `put` always locks the URL entry before the code entry; no
/// other path holds both, so the two-step lock cannot deadlock.
///
/// Contents are lost on restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    by_code: DashMap<String, ShortLink>,
    by_url: DashMap<String, String>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn put(&self, new_link: NewLink) -> Result<ShortLink, StoreError> {
        let url_slot = match self.by_url.entry(new_link.original_url.clone()) {
            Entry::Occupied(_) => return Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => slot,
        };

        let code_slot = match self.by_code.entry(new_link.code.clone()) {
            Entry::Occupied(_) => {
                debug!(code = %new_link.code, "Code already taken");
                return Err(StoreError::AlreadyExists);
            }
            Entry::Vacant(slot) => slot,
        };

        let link = new_link.into_link(Utc::now());
        code_slot.insert(link.clone());
        url_slot.insert(link.code.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        Ok(self.by_code.get(code).map(|entry| entry.value().clone()))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, StoreError> {
        // Release the by_url guard before touching by_code.
        let code = match self.by_url.get(url) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };

        self.find_by_code(&code).await
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
