// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::models::cache_entry::LeadCacheEntry;

/// 线索搜索缓存仓库
///
/// 每个 (user_id, project_id, cache_key) 最多一条记录
#[async_trait]
pub trait LeadCacheRepository: Send + Sync {
    /// 查找在 `now` 时刻仍未过期的条目
    async fn find_fresh(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        cache_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<LeadCacheEntry>, RepositoryError>;

    /// 写入或整体覆盖同键条目
    async fn upsert(&self, entry: &LeadCacheEntry) -> Result<(), RepositoryError>;
}
