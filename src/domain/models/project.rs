// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 项目实体
///
/// 关键词解析和 Reddit 发现都以项目为输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    /// 项目所有者
    pub user_id: Uuid,
    pub name: String,
    /// 自由文本的产品描述
    pub product_description: String,
    /// 用户显式配置的关键词（可能为空）
    pub keywords: Vec<String>,
    /// 不带 `r/` 前缀的子版块名
    pub subreddits: Vec<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(user_id: Uuid, name: impl Into<String>, product_description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            product_description: product_description.into(),
            keywords: Vec::new(),
            subreddits: Vec::new(),
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subreddits<I, S>(mut self, subreddits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subreddits = subreddits.into_iter().map(Into::into).collect();
        self
    }
}

/// 项目的部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub product_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub subreddits: Option<Vec<String>>,
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.product_description.is_none()
            && self.keywords.is_none()
            && self.subreddits.is_none()
    }
}

impl Project {
    pub fn apply(&mut self, update: ProjectUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.product_description {
            self.product_description = description;
        }
        if let Some(keywords) = update.keywords {
            self.keywords = normalize_keywords(keywords);
        }
        if let Some(subreddits) = update.subreddits {
            self.subreddits = normalize_subreddits(subreddits);
        }
        self.updated_at = now;
    }
}

/// 去掉首尾空白并丢弃空项
pub fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|keyword| keyword.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// `r/startups`、` /r/startups ` 都归一为 `startups`
pub fn normalize_subreddits(subreddits: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for subreddit in subreddits {
        let name = subreddit.trim().trim_start_matches('/');
        let name = name
            .strip_prefix("r/")
            .or_else(|| name.strip_prefix("R/"))
            .unwrap_or(name)
            .trim_matches('/')
            .to_string();
        if !name.is_empty() && !normalized.contains(&name) {
            normalized.push(name);
        }
    }
    normalized
}
