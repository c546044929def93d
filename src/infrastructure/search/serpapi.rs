// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::models::lead::{EngineKind, NormalizedHit};
use crate::domain::models::search_config::TimeWindow;
use crate::domain::search::engine::{SearchEngine, SearchError};

pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// 响应中会被遍历的结果数组，按顺序合并
const RESULT_ARRAYS: [&str; 3] = ["organic_results", "news_results", "top_stories"];

/// 各字段的候选键，取第一个非空值
struct ExtractionRules {
    url: &'static [&'static str],
    title: &'static [&'static str],
    snippet: &'static [&'static str],
    published_at: &'static [&'static str],
}

const RULES: ExtractionRules = ExtractionRules {
    url: &["link", "url", "first_url"],
    title: &["title", "heading", "name"],
    snippet: &["snippet", "description", "body"],
    published_at: &["date", "published", "time"],
};

/// SerpAPI 搜索引擎
///
/// 同一个结构体服务 google 和 bing，两者只在新鲜度参数上不同
pub struct SerpApiEngine {
    client: Client,
    kind: EngineKind,
    base_url: String,
    api_key: Option<String>,
    num: u32,
}

impl SerpApiEngine {
    pub fn new(client: Client, kind: EngineKind, api_key: Option<String>) -> Self {
        Self {
            client,
            kind,
            base_url: DEFAULT_SERPAPI_URL.to_string(),
            api_key,
            num: 20,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_num(mut self, num: u32) -> Self {
        self.num = num;
        self
    }

    /// 引擎特定的时间窗口参数
    fn freshness_param(&self, time_window: TimeWindow) -> (&'static str, &'static str) {
        match (self.kind, time_window) {
            (EngineKind::Google, TimeWindow::Week) => ("tbs", "qdr:w"),
            (EngineKind::Google, TimeWindow::Month) => ("tbs", "qdr:m"),
            (EngineKind::Bing, TimeWindow::Week) => ("freshness", "Week"),
            (EngineKind::Bing, TimeWindow::Month) => ("freshness", "Month"),
        }
    }
}

#[async_trait]
impl SearchEngine for SerpApiEngine {
    async fn search(
        &self,
        query: &str,
        time_window: TimeWindow,
    ) -> Result<Vec<NormalizedHit>, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SearchError::NotConfigured("SerpAPI api key is not set".to_string()))?;

        let (freshness_key, freshness_value) = self.freshness_param(time_window);
        let num = self.num.to_string();

        debug!(
            "SerpAPI {} request, window {} days",
            self.kind,
            time_window.days()
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("engine", self.kind.as_str()),
                ("q", query),
                ("api_key", api_key),
                ("num", num.as_str()),
                (freshness_key, freshness_value),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .filter(|body| !body.is_empty())
                .unwrap_or_else(|| status.to_string());
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let payload = match response.json::<Value>().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("SerpAPI {} returned an unreadable body: {}", self.kind, e);
                Value::Null
            }
        };

        let hits = extract_hits(&payload, self.kind);
        debug!("SerpAPI {} normalized {} hits", self.kind, hits.len());
        Ok(hits)
    }

    fn kind(&self) -> EngineKind {
        self.kind
    }
}

/// 将 SerpAPI 响应投影为统一的命中结构
///
/// 缺少 url 或标题的条目被丢弃
pub fn extract_hits(payload: &Value, engine: EngineKind) -> Vec<NormalizedHit> {
    let Some(object) = payload.as_object() else {
        return Vec::new();
    };

    RESULT_ARRAYS
        .iter()
        .filter_map(|name| object.get(*name).and_then(Value::as_array))
        .flatten()
        .filter_map(|entry| {
            let record = entry.as_object()?;
            let url = first_text(record, RULES.url)?;
            let title = first_text(record, RULES.title)?;

            Some(NormalizedHit {
                url,
                title,
                snippet: first_text(record, RULES.snippet).unwrap_or_default(),
                published_at: first_text(record, RULES.published_at),
                engine,
            })
        })
        .collect()
}

fn first_text(record: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        let text = match record.get(*key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    })
}
