// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::cache_entry::{CachedLeadPayload, LeadCacheEntry};
use crate::domain::repositories::lead_cache_repository::LeadCacheRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::cache::redis_client::RedisClient;

#[derive(Serialize, Deserialize)]
struct StoredEntry {
    payload: CachedLeadPayload,
    expires_at: DateTime<Utc>,
}

/// Redis 线索缓存
///
/// 键格式 `lead_cache:{user}:{project}:{hash}`，过期时间交给 Redis；
/// 读取时仍按 `expires_at` 校验，保证与调用方时钟一致
pub struct RedisLeadCache {
    client: Arc<RedisClient>,
}

impl RedisLeadCache {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }

    pub fn key(user_id: Uuid, project_id: Uuid, cache_key: &str) -> String {
        format!("lead_cache:{}:{}:{}", user_id, project_id, cache_key)
    }
}

#[async_trait]
impl LeadCacheRepository for RedisLeadCache {
    async fn find_fresh(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        cache_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<LeadCacheEntry>, RepositoryError> {
        let raw = self
            .client
            .get(&Self::key(user_id, project_id, cache_key))
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let stored: StoredEntry = serde_json::from_str(&raw)?;
        let entry = LeadCacheEntry {
            user_id,
            project_id,
            cache_key: cache_key.to_string(),
            payload: stored.payload,
            expires_at: stored.expires_at,
        };

        Ok(entry.is_fresh_at(now).then_some(entry))
    }

    async fn upsert(&self, entry: &LeadCacheEntry) -> Result<(), RepositoryError> {
        let ttl_seconds = (entry.expires_at - Utc::now()).num_seconds();
        if ttl_seconds <= 0 {
            return Ok(());
        }

        let stored = StoredEntry {
            payload: entry.payload.clone(),
            expires_at: entry.expires_at,
        };
        let value = serde_json::to_string(&stored)?;

        self.client
            .set_ex(
                &Self::key(entry.user_id, entry.project_id, &entry.cache_key),
                &value,
                ttl_seconds as u64,
            )
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }
}
