// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::models::reddit_post::{RedditSearchResult, RedditTimeRange};
use crate::utils::url_utils::join_path;

pub const DEFAULT_REDDIT_URL: &str = "https://www.reddit.com";
pub const DEFAULT_USER_AGENT: &str = "leadrs/0.1 (lead discovery)";

const EXCERPT_CHARS: usize = 240;
const KEYWORD_MATCH_POINTS: u32 = 18;

#[derive(Debug, Default, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default, deserialize_with = "null_as_default")]
    children: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RedditPost {
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    selftext: String,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    subreddit: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    created_utc: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    score: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    num_comments: i64,
}

/// Reddit 对缺省字段经常返回 `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 逐条解析 listing 的 children，无法解析的条目被丢弃
fn parse_children(children: Vec<serde_json::Value>, subreddit: &str) -> Vec<RedditPost> {
    children
        .into_iter()
        .filter_map(|mut child| {
            let data = child.get_mut("data").map(serde_json::Value::take)?;
            match serde_json::from_value::<RedditPost>(data) {
                Ok(post) => Some(post),
                Err(e) => {
                    debug!("Dropping malformed r/{} entry: {}", subreddit, e);
                    None
                }
            }
        })
        .map(|mut post| {
            if post.subreddit.is_none() {
                post.subreddit = Some(subreddit.to_string());
            }
            post
        })
        .collect()
}

/// Reddit 原生搜索客户端
///
/// 对每个 (子版块, 关键词) 组合发起一次站内搜索，失败的组合被跳过
pub struct RedditClient {
    client: Client,
    base_url: Url,
    user_agent: String,
    max_concurrency: usize,
}

impl RedditClient {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: 4,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// 搜索所有组合并按相关度降序返回
    ///
    /// 同一帖子 id 只保留第一次出现（按子版块、关键词的遍历顺序）
    pub async fn search<K, S>(
        &self,
        keywords: &[K],
        subreddits: &[S],
        time_range: RedditTimeRange,
    ) -> Vec<RedditSearchResult>
    where
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let pairs: Vec<(String, String)> = subreddits
            .iter()
            .flat_map(|subreddit| {
                keywords.iter().map(move |keyword| {
                    (subreddit.as_ref().to_string(), keyword.as_ref().to_string())
                })
            })
            .collect();

        debug!("Reddit search over {} subreddit/keyword pairs", pairs.len());

        // buffered keeps pair order, so first-seen is deterministic
        let batches: Vec<Vec<RedditPost>> = stream::iter(pairs)
            .map(|(subreddit, keyword)| async move {
                self.fetch_pair(&subreddit, &keyword, time_range).await
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let mut seen: HashSet<String> = HashSet::new();
        let mut results = Vec::new();
        for post in batches.into_iter().flatten() {
            if post.id.is_empty() || !seen.insert(post.id.clone()) {
                continue;
            }
            results.push(to_result(post, keywords));
        }

        // stable: equal scores keep discovery order
        results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        results
    }

    async fn fetch_pair(
        &self,
        subreddit: &str,
        keyword: &str,
        time_range: RedditTimeRange,
    ) -> Vec<RedditPost> {
        let url = join_path(&self.base_url, &["r", subreddit, "search.json"]);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("q", keyword),
                ("restrict_sr", "1"),
                ("sort", "new"),
                ("t", time_range.as_str()),
            ])
            .send()
            .await;

        let response = match response {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(
                    "Reddit search r/{} '{}' returned {}, skipping",
                    subreddit,
                    keyword,
                    response.status()
                );
                metrics::counter!("leadrs_reddit_requests_skipped_total").increment(1);
                return Vec::new();
            }
            Err(e) => {
                warn!("Reddit search r/{} '{}' failed: {}", subreddit, keyword, e);
                metrics::counter!("leadrs_reddit_requests_skipped_total").increment(1);
                return Vec::new();
            }
        };

        match response.json::<Listing>().await {
            Ok(listing) => parse_children(listing.data.children, subreddit),
            Err(e) => {
                warn!("Reddit search r/{} '{}' returned bad JSON: {}", subreddit, keyword, e);
                metrics::counter!("leadrs_reddit_requests_skipped_total").increment(1);
                Vec::new()
            }
        }
    }
}

fn to_result<K: AsRef<str>>(post: RedditPost, keywords: &[K]) -> RedditSearchResult {
    let excerpt: String = post.selftext.chars().take(EXCERPT_CHARS).collect();
    let relevance_score = score_relevance(&format!("{} {}", post.title, excerpt), keywords);
    let created_at =
        DateTime::<Utc>::from_timestamp(post.created_utc as i64, 0).unwrap_or_default();

    RedditSearchResult {
        external_id: post.id,
        url: post.url,
        title: post.title,
        author: post.author.unwrap_or_else(|| "unknown".to_string()),
        subreddit: post.subreddit.unwrap_or_default(),
        created_at,
        score: post.score,
        num_comments: post.num_comments,
        excerpt,
        relevance_score,
    }
}

/// 每个命中的关键词 +18，上限 100
pub fn score_relevance<K: AsRef<str>>(text: &str, keywords: &[K]) -> u8 {
    let text = text.to_lowercase();
    let score: u32 = keywords
        .iter()
        .map(|keyword| keyword.as_ref().trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty() && text.contains(keyword.as_str()))
        .map(|_| KEYWORD_MATCH_POINTS)
        .sum();
    score.min(100) as u8
}
