// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 外部搜索引擎标识
///
/// 枚举顺序即合并优先级：通用网页搜索在前，新闻/时效搜索在后
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Google,
    Bing,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Google => "google",
            EngineKind::Bing => "bing",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(EngineKind::Google),
            "bing" => Ok(EngineKind::Bing),
            other => Err(format!("unknown search engine: {}", other)),
        }
    }
}

/// 归一化后的搜索命中
///
/// 仅存在于一次搜索调用中，不会被持久化
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub published_at: Option<String>,
    pub engine: EngineKind,
}

impl NormalizedHit {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        snippet: impl Into<String>,
        engine: EngineKind,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            snippet: snippet.into(),
            published_at: None,
            engine,
        }
    }
}

/// 评分、去重后的线索结果
///
/// 生成后不可变；缓存与接口返回的都是这个结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResult {
    /// `engine:url` 的确定性哈希
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub url: String,
    /// 来源标签，如 "Reddit"、"Hacker News"
    pub source: String,
    /// 0..=100
    pub score: u8,
    pub engine: EngineKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub keywords_matched: Vec<String>,
    pub thread_like: bool,
    pub is_article: bool,
}
