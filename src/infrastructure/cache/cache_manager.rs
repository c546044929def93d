// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::models::cache_entry::{CachedLeadPayload, LeadCacheEntry};
use crate::domain::models::search_config::SearchConfig;
use crate::domain::repositories::lead_cache_repository::LeadCacheRepository;

/// 默认缓存有效期（小时）
pub const DEFAULT_TTL_HOURS: i64 = 6;

/// 参与哈希的缓存键输入，字段顺序固定
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheKeyInput<'a> {
    user_id: String,
    project_id: String,
    sites: Vec<&'a str>,
    time_window: &'a str,
    limit: u32,
    exclude_articles: bool,
    keywords: Vec<&'a str>,
}

/// 缓存管理器
///
/// 负责缓存键生成与 TTL 控制，实际存储由注入的仓库提供。
/// 读失败按未命中处理，写失败只记录日志，不影响搜索结果。
pub struct LeadCacheManager {
    store: Arc<dyn LeadCacheRepository>,
    ttl: Duration,
}

impl LeadCacheManager {
    pub fn new(store: Arc<dyn LeadCacheRepository>) -> Self {
        Self::with_ttl(store, Duration::hours(DEFAULT_TTL_HOURS))
    }

    pub fn with_ttl(store: Arc<dyn LeadCacheRepository>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// 缓存键：对排序后的完整搜索配置加调用方身份做 SHA-256
    ///
    /// `sites` 和 `keywords` 的顺序不影响结果
    pub fn generate_cache_key(user_id: Uuid, project_id: Uuid, config: &SearchConfig) -> String {
        let mut sites: Vec<&str> = config.sites.iter().map(|site| site.as_str()).collect();
        sites.sort_unstable();
        sites.dedup();
        let mut keywords: Vec<&str> = config.keywords.iter().map(String::as_str).collect();
        keywords.sort_unstable();

        let input = CacheKeyInput {
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            sites,
            time_window: config.time_window.as_str(),
            limit: u32::from(config.limit),
            exclude_articles: config.exclude_articles,
            keywords,
        };

        // Serializing a plain struct of strings, numbers and bools cannot fail
        let encoded = serde_json::to_vec(&input).unwrap_or_default();
        hex::encode(Sha256::digest(&encoded))
    }

    /// 获取 `now` 时刻仍有效的缓存载荷
    pub async fn get(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        cache_key: &str,
        now: DateTime<Utc>,
    ) -> Option<CachedLeadPayload> {
        match self
            .store
            .find_fresh(user_id, project_id, cache_key, now)
            .await
        {
            Ok(Some(entry)) => {
                debug!("Lead cache hit for key {}", cache_key);
                Some(entry.payload)
            }
            Ok(None) => {
                debug!("Lead cache miss for key {}", cache_key);
                None
            }
            Err(e) => {
                warn!("Lead cache read failed, treating as miss: {}", e);
                None
            }
        }
    }

    /// 覆盖写入，`expires_at = now + ttl`
    ///
    /// 返回是否写入成功；失败不会向上传播
    pub async fn set(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        cache_key: &str,
        payload: CachedLeadPayload,
        now: DateTime<Utc>,
    ) -> bool {
        let entry = LeadCacheEntry {
            user_id,
            project_id,
            cache_key: cache_key.to_string(),
            payload,
            expires_at: now + self.ttl,
        };

        match self.store.upsert(&entry).await {
            Ok(()) => {
                debug!("Stored lead cache entry {} until {}", cache_key, entry.expires_at);
                true
            }
            Err(e) => {
                warn!("Failed to store lead cache entry {}: {}", cache_key, e);
                metrics::counter!("leadrs_cache_write_failures_total").increment(1);
                false
            }
        }
    }
}
