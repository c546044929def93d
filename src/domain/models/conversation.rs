// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PLATFORM_REDDIT: &str = "REDDIT";
pub const PLATFORM_WEB: &str = "WEB";

/// 已保存的会话（Reddit 发现结果或用户保存的线索）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub platform: String,
    /// 平台侧 ID；保存的网页线索没有
    pub external_id: Option<String>,
    pub url: String,
    pub title: String,
    pub author: Option<String>,
    pub subreddit: Option<String>,
    pub excerpt: String,
    pub score: i64,
    pub num_comments: i64,
    pub relevance_score: i32,
    pub source: Option<String>,
    pub platform_created_at: DateTime<Utc>,
    pub found_at: DateTime<Utc>,
}

/// Reddit 发现的汇总结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySummary {
    pub conversations_added: u64,
    pub total_found: usize,
}

/// 会话列表过滤条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversationFilter {
    /// `relevance_score >= min_relevance`
    pub min_relevance: Option<i32>,
    /// `platform_created_at >= since`
    pub since: Option<DateTime<Utc>>,
}

/// 保存线索的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveLeadOutcome {
    Saved,
    AlreadySaved,
}

impl SaveLeadOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveLeadOutcome::Saved => "saved",
            SaveLeadOutcome::AlreadySaved => "already saved",
        }
    }
}

/// 待保存的网页线索
#[derive(Debug, Clone, PartialEq)]
pub struct LeadToSave {
    pub url: String,
    pub title: String,
    pub snippet: String,
    /// 0..=100
    pub score: u8,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl Conversation {
    /// 由保存的线索构造会话；线索分数同时写入 `score` 和 `relevance_score`
    pub fn from_saved_lead(
        user_id: Uuid,
        project_id: Uuid,
        lead: LeadToSave,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            project_id,
            platform: PLATFORM_WEB.to_string(),
            external_id: None,
            url: lead.url,
            title: lead.title,
            author: None,
            subreddit: None,
            excerpt: lead.snippet,
            score: i64::from(lead.score),
            num_comments: 0,
            relevance_score: i32::from(lead.score),
            source: Some(lead.source),
            platform_created_at: lead.published_at.unwrap_or(now),
            found_at: now,
        }
    }
}
