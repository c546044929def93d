// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reddit 原生搜索的时间范围（对应 `t` 参数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RedditTimeRange {
    Day,
    #[default]
    Week,
    Month,
    Year,
    All,
}

impl RedditTimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedditTimeRange::Day => "day",
            RedditTimeRange::Week => "week",
            RedditTimeRange::Month => "month",
            RedditTimeRange::Year => "year",
            RedditTimeRange::All => "all",
        }
    }

    /// 回看天数；`All` 不设下限
    pub fn days(&self) -> Option<i64> {
        match self {
            RedditTimeRange::Day => Some(1),
            RedditTimeRange::Week => Some(7),
            RedditTimeRange::Month => Some(30),
            RedditTimeRange::Year => Some(365),
            RedditTimeRange::All => None,
        }
    }
}

/// Reddit 原生搜索的单条结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedditSearchResult {
    pub external_id: String,
    pub url: String,
    pub title: String,
    pub author: String,
    pub subreddit: String,
    pub created_at: DateTime<Utc>,
    /// 帖子点赞数
    pub score: i64,
    pub num_comments: i64,
    /// 正文前 240 个字符
    pub excerpt: String,
    /// 0..=100
    pub relevance_score: u8,
}
