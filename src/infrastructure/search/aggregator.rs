// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::models::lead::NormalizedHit;
use crate::domain::models::search_config::TimeWindow;
use crate::domain::search::engine::{SearchEngine, SearchError};

/// 多引擎搜索客户端
///
/// 并行查询所有引擎，结果按引擎注册顺序拼接（该顺序即去重优先级）。
/// 默认逐引擎隔离失败；`fail_fast` 时任一失败即整体失败。
pub struct SearchAggregator {
    engines: Vec<Arc<dyn SearchEngine>>,
    timeout: Duration,
    fail_fast: bool,
}

impl SearchAggregator {
    pub fn new(engines: Vec<Arc<dyn SearchEngine>>, timeout: Duration) -> Self {
        Self {
            engines,
            timeout,
            fail_fast: false,
        }
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn engine_names(&self) -> Vec<&'static str> {
        self.engines.iter().map(|engine| engine.name()).collect()
    }

    pub async fn search(
        &self,
        query: &str,
        time_window: TimeWindow,
    ) -> Result<Vec<NormalizedHit>, SearchError> {
        if self.engines.is_empty() {
            return Err(SearchError::NotConfigured(
                "no search engines configured".to_string(),
            ));
        }

        let futures = self.engines.iter().map(|engine| {
            let engine = engine.clone();
            async move {
                let engine_name = engine.name();
                let result = tokio::time::timeout(self.timeout, engine.search(query, time_window))
                    .await
                    .unwrap_or(Err(SearchError::Timeout));

                match &result {
                    Ok(hits) => info!("Engine {} returned {} hits", engine_name, hits.len()),
                    Err(e) => {
                        warn!("Engine {} failed: {}", engine_name, e);
                        metrics::counter!("leadrs_engine_failures_total", "engine" => engine_name)
                            .increment(1);
                    }
                }
                result
            }
        });

        // join_all preserves input order
        let outcomes = join_all(futures).await;
        self.merge(outcomes)
    }

    fn merge(
        &self,
        outcomes: Vec<Result<Vec<NormalizedHit>, SearchError>>,
    ) -> Result<Vec<NormalizedHit>, SearchError> {
        let mut hits = Vec::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(engine_hits) => hits.extend(engine_hits),
                Err(e) if self.fail_fast => return Err(e),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() && errors.len() == self.engines.len() {
            // surface the most actionable failure
            let rate_limited = errors.iter().position(SearchError::is_rate_limited);
            let index = rate_limited.unwrap_or(0);
            return Err(errors.swap_remove(index));
        }

        Ok(hits)
    }
}
