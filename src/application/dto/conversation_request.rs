// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::conversation::Conversation;
use crate::domain::models::reddit_post::RedditTimeRange;

/// `GET /v1/conversations` 的查询参数
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationListQuery {
    pub project_id: Option<Uuid>,
    pub min_relevance: Option<f64>,
    pub time_range: Option<RedditTimeRange>,
}

impl ConversationListQuery {
    /// 相关度是整数，`50.5` 等价于 `>= 51`
    pub fn min_relevance(&self) -> Option<i32> {
        self.min_relevance
            .filter(|value| value.is_finite())
            .map(|value| value.ceil().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponseDto {
    pub id: Uuid,
    pub project_id: Uuid,
    pub platform: String,
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

impl From<Conversation> for ConversationResponseDto {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id,
            project_id: conversation.project_id,
            platform: conversation.platform,
            external_id: conversation.external_id,
            url: conversation.url,
            title: conversation.title,
            author: conversation.author,
            subreddit: conversation.subreddit,
            excerpt: conversation.excerpt,
            score: conversation.score,
            num_comments: conversation.num_comments,
            relevance_score: conversation.relevance_score,
            source: conversation.source,
            platform_created_at: conversation.platform_created_at,
            found_at: conversation.found_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationListResponseDto {
    pub conversations: Vec<ConversationResponseDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationEnvelopeDto {
    pub conversation: ConversationResponseDto,
}
