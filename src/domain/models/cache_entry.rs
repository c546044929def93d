// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::lead::LeadResult;

/// 缓存的搜索结果载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLeadPayload {
    pub results: Vec<LeadResult>,
    pub query: String,
}

/// 线索搜索缓存条目
///
/// 每次非命中搜索都会整体覆盖写入，从不显式删除
#[derive(Debug, Clone, PartialEq)]
pub struct LeadCacheEntry {
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub cache_key: String,
    pub payload: CachedLeadPayload,
    pub expires_at: DateTime<Utc>,
}

impl LeadCacheEntry {
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
