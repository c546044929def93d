// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::models::cache_entry::CachedLeadPayload;
use crate::domain::models::lead::LeadResult;
use crate::domain::models::project::Project;
use crate::domain::models::search_config::{LeadSearchOptions, SearchConfig};
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::search::engine::SearchError;
use crate::domain::services::keyword_resolver::KeywordResolver;
use crate::domain::services::lead_ranker::rank_leads;
use crate::domain::services::query_builder::build_lead_query;
use crate::infrastructure::cache::cache_manager::LeadCacheManager;
use crate::infrastructure::search::aggregator::SearchAggregator;

#[derive(Error, Debug)]
pub enum LeadSearchError {
    /// 上游搜索服务返回 429
    #[error("Search provider rate-limited: {0}")]
    RateLimited(SearchError),
    #[error("Search provider failed: {0}")]
    Upstream(SearchError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Project not found")]
    ProjectNotFound,
}

impl From<SearchError> for LeadSearchError {
    fn from(err: SearchError) -> Self {
        if err.is_rate_limited() {
            LeadSearchError::RateLimited(err)
        } else {
            LeadSearchError::Upstream(err)
        }
    }
}

/// 一次线索搜索的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSearchOutcome {
    pub results: Vec<LeadResult>,
    pub query: String,
    pub cached: bool,
}

/// 线索搜索服务
///
/// 关键词解析 → 缓存键 → 命中则直接返回 → 构造查询 → 多引擎搜索 →
/// 去重评分截断 → 写回缓存
pub struct LeadSearchService<PR> {
    project_repo: Arc<PR>,
    aggregator: Arc<SearchAggregator>,
    cache: Arc<LeadCacheManager>,
}

impl<PR> LeadSearchService<PR>
where
    PR: ProjectRepository + 'static,
{
    pub fn new(
        project_repo: Arc<PR>,
        aggregator: Arc<SearchAggregator>,
        cache: Arc<LeadCacheManager>,
    ) -> Self {
        Self {
            project_repo,
            aggregator,
            cache,
        }
    }

    /// 按ID查找调用方的项目后搜索
    pub async fn search_project(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        options: LeadSearchOptions,
    ) -> Result<LeadSearchOutcome, LeadSearchError> {
        let project = self
            .project_repo
            .find_for_user(project_id, user_id)
            .await?
            .ok_or(LeadSearchError::ProjectNotFound)?;

        self.search(user_id, &project, options).await
    }

    pub async fn search(
        &self,
        user_id: Uuid,
        project: &Project,
        options: LeadSearchOptions,
    ) -> Result<LeadSearchOutcome, LeadSearchError> {
        if options.sites.is_empty() {
            return Err(LeadSearchError::Validation(
                "at least one site is required".to_string(),
            ));
        }

        let started = Instant::now();
        let keywords = KeywordResolver::resolve(project);
        debug!("Resolved keywords for project {}: {:?}", project.id, keywords.as_slice());

        let config = SearchConfig::new(keywords, &options);
        let cache_key = LeadCacheManager::generate_cache_key(user_id, project.id, &config);

        if !options.force_refresh {
            if let Some(payload) = self
                .cache
                .get(user_id, project.id, &cache_key, Utc::now())
                .await
            {
                info!(
                    "Serving {} cached leads for project {}",
                    payload.results.len(),
                    project.id
                );
                metrics::counter!("leadrs_lead_search_total", "cached" => "true").increment(1);
                return Ok(LeadSearchOutcome {
                    results: payload.results,
                    query: payload.query,
                    cached: true,
                });
            }
        }

        let query = build_lead_query(config.keywords.as_slice(), &config.sites);
        debug!("Lead query: {}", query);

        let hits = self.aggregator.search(&query, config.time_window).await?;
        let results = rank_leads(
            &hits,
            config.keywords.as_slice(),
            config.exclude_articles,
            config.limit,
        );

        info!(
            "Ranked {} leads from {} hits for project {}",
            results.len(),
            hits.len(),
            project.id
        );

        // a failed write is logged by the cache manager and does not fail the search
        self.cache
            .set(
                user_id,
                project.id,
                &cache_key,
                CachedLeadPayload {
                    results: results.clone(),
                    query: query.clone(),
                },
                Utc::now(),
            )
            .await;

        metrics::counter!("leadrs_lead_search_total", "cached" => "false").increment(1);
        metrics::histogram!("leadrs_lead_search_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        Ok(LeadSearchOutcome {
            results,
            query,
            cached: false,
        })
    }
}
