// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::models::cache_entry::LeadCacheEntry;
use crate::domain::repositories::lead_cache_repository::LeadCacheRepository;
use crate::domain::repositories::RepositoryError;

type EntryKey = (Uuid, Uuid, String);

/// 进程内缓存，用于开发环境和测试
///
/// 过期条目不会被主动清理，读取时按 `expires_at` 过滤
#[derive(Default)]
pub struct MemoryLeadCache {
    entries: DashMap<EntryKey, LeadCacheEntry>,
}

impl MemoryLeadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LeadCacheRepository for MemoryLeadCache {
    async fn find_fresh(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        cache_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<LeadCacheEntry>, RepositoryError> {
        let key = (user_id, project_id, cache_key.to_string());
        Ok(self
            .entries
            .get(&key)
            .filter(|entry| entry.is_fresh_at(now))
            .map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, entry: &LeadCacheEntry) -> Result<(), RepositoryError> {
        let key = (entry.user_id, entry.project_id, entry.cache_key.clone());
        self.entries.insert(key, entry.clone());
        Ok(())
    }
}
