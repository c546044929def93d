// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 关键词集合的最小数量
pub const MIN_KEYWORDS: usize = 3;
/// 关键词集合的最大数量
pub const MAX_KEYWORDS: usize = 8;

/// 线索搜索的目标站点
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSite {
    Reddit,
    Hackernews,
    Indiehackers,
    Github,
}

impl LeadSite {
    pub const ALL: [LeadSite; 4] = [
        LeadSite::Reddit,
        LeadSite::Hackernews,
        LeadSite::Indiehackers,
        LeadSite::Github,
    ];

    /// 用于 `site:` 限定的域名
    pub fn domain(&self) -> &'static str {
        match self {
            LeadSite::Reddit => "reddit.com",
            LeadSite::Hackernews => "news.ycombinator.com",
            LeadSite::Indiehackers => "indiehackers.com",
            LeadSite::Github => "github.com",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSite::Reddit => "reddit",
            LeadSite::Hackernews => "hackernews",
            LeadSite::Indiehackers => "indiehackers",
            LeadSite::Github => "github",
        }
    }
}

impl fmt::Display for LeadSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 搜索时间窗口（天）
///
/// 序列化为字符串 "7" / "30"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeWindow {
    #[serde(rename = "7")]
    Week,
    #[serde(rename = "30")]
    #[default]
    Month,
}

impl TimeWindow {
    pub fn days(&self) -> u32 {
        match self {
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Week => "7",
            TimeWindow::Month => "30",
        }
    }
}

/// 返回结果数量上限，只允许 5 / 10 / 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum ResultLimit {
    Five,
    #[default]
    Ten,
    Twenty,
}

impl ResultLimit {
    pub fn get(&self) -> usize {
        match self {
            ResultLimit::Five => 5,
            ResultLimit::Ten => 10,
            ResultLimit::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for ResultLimit {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(ResultLimit::Five),
            10 => Ok(ResultLimit::Ten),
            20 => Ok(ResultLimit::Twenty),
            other => Err(format!("limit must be 5, 10 or 20 (got {})", other)),
        }
    }
}

impl From<ResultLimit> for u32 {
    fn from(limit: ResultLimit) -> Self {
        limit.get() as u32
    }
}

/// 有序关键词集合
///
/// 不变式：数量在 [3, 8] 之间，全部小写且不含引号。
/// 只能通过 `KeywordResolver` 构造。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub(crate) fn from_resolved(keywords: Vec<String>) -> Self {
        debug_assert!((MIN_KEYWORDS..=MAX_KEYWORDS).contains(&keywords.len()));
        Self(keywords)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 一次线索搜索的调用方选项
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSearchOptions {
    pub sites: Vec<LeadSite>,
    pub time_window: TimeWindow,
    pub limit: ResultLimit,
    pub exclude_articles: bool,
    /// 跳过缓存读取
    pub force_refresh: bool,
}

impl Default for LeadSearchOptions {
    fn default() -> Self {
        Self {
            sites: LeadSite::ALL.to_vec(),
            time_window: TimeWindow::default(),
            limit: ResultLimit::default(),
            exclude_articles: true,
            force_refresh: false,
        }
    }
}

/// 完整的搜索配置
///
/// 每次调用不可变，同时决定查询字符串和缓存键
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub keywords: KeywordSet,
    pub sites: Vec<LeadSite>,
    pub time_window: TimeWindow,
    pub limit: ResultLimit,
    pub exclude_articles: bool,
}

impl SearchConfig {
    /// `sites` 是集合：重复项按首次出现去重
    pub fn new(keywords: KeywordSet, options: &LeadSearchOptions) -> Self {
        let mut sites: Vec<LeadSite> = Vec::with_capacity(options.sites.len());
        for site in &options.sites {
            if !sites.contains(site) {
                sites.push(*site);
            }
        }

        Self {
            keywords,
            sites,
            time_window: options.time_window,
            limit: options.limit,
            exclude_articles: options.exclude_articles,
        }
    }
}
