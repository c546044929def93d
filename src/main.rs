// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use leadrs::config::settings::{CacheBackend, Settings};
use leadrs::domain::repositories::lead_cache_repository::LeadCacheRepository;
use leadrs::domain::search::engine::SearchEngine;
use leadrs::domain::services::conversation_discovery_service::ConversationDiscoveryService;
use leadrs::domain::services::lead_search_service::LeadSearchService;
use leadrs::domain::services::project_service::ProjectService;
use leadrs::infrastructure::cache::cache_manager::LeadCacheManager;
use leadrs::infrastructure::cache::memory_lead_cache::MemoryLeadCache;
use leadrs::infrastructure::cache::redis_client::RedisClient;
use leadrs::infrastructure::cache::redis_lead_cache::RedisLeadCache;
use leadrs::infrastructure::database::connection;
use leadrs::infrastructure::repositories::conversation_repo_impl::ConversationRepoImpl;
use leadrs::infrastructure::repositories::lead_cache_repo_impl::LeadCacheRepoImpl;
use leadrs::infrastructure::repositories::project_repo_impl::ProjectRepoImpl;
use leadrs::infrastructure::search::aggregator::SearchAggregator;
use leadrs::infrastructure::search::reddit::RedditClient;
use leadrs::infrastructure::search::serpapi::SerpApiEngine;
use leadrs::presentation::routes;
use leadrs::utils::telemetry;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tracing::{info, warn};
use url::Url;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.log);
    info!("Starting leadrs...");

    if settings.metrics.enabled {
        leadrs::infrastructure::metrics::init_metrics(&settings.metrics.address);
    }

    // 3. Connect to database and run migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established, migrations applied");

    // 4. Lead cache
    let cache_store = build_cache_store(&settings, db.clone()).await?;
    let cache = Arc::new(LeadCacheManager::with_ttl(
        cache_store,
        chrono::Duration::hours(settings.cache.ttl_hours),
    ));
    info!(
        "Lead cache backend {:?}, ttl {}h",
        settings.cache.backend, settings.cache.ttl_hours
    );

    // 5. Outbound search clients
    let timeout = Duration::from_secs(settings.http.request_timeout_secs);
    let http = reqwest::Client::builder().timeout(timeout).build()?;

    if settings.serpapi.api_key.is_none() {
        warn!("SerpAPI api key is not set, lead searches will fail");
    }
    let engines: Vec<Arc<dyn SearchEngine>> = settings
        .serpapi
        .engines
        .iter()
        .map(|kind| {
            Arc::new(
                SerpApiEngine::new(http.clone(), *kind, settings.serpapi.api_key.clone())
                    .with_base_url(settings.serpapi.base_url.clone())
                    .with_num(settings.serpapi.num),
            ) as Arc<dyn SearchEngine>
        })
        .collect();
    let aggregator = Arc::new(
        SearchAggregator::new(engines, timeout).with_fail_fast(settings.serpapi.fail_fast),
    );
    info!("Search engines: {:?}", aggregator.engine_names());

    let reddit_base = Url::parse(&settings.reddit.base_url)
        .with_context(|| format!("invalid reddit.base_url {}", settings.reddit.base_url))?;
    let reddit = Arc::new(
        RedditClient::new(http, reddit_base)
            .with_user_agent(settings.reddit.user_agent.clone())
            .with_max_concurrency(settings.reddit.max_concurrency),
    );

    // 6. Services
    let project_repo = Arc::new(ProjectRepoImpl::new(db.clone()));
    let conversation_repo = Arc::new(ConversationRepoImpl::new(db.clone()));
    let projects = Arc::new(ProjectService::new(project_repo.clone()));
    let lead_search = Arc::new(LeadSearchService::new(
        project_repo.clone(),
        aggregator,
        cache,
    ));
    let discovery = Arc::new(ConversationDiscoveryService::new(
        project_repo,
        conversation_repo,
        reddit,
    ));

    // 7. Start HTTP server
    let app = routes::app(projects, lead_search, discovery);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_cache_store(
    settings: &Settings,
    db: Arc<DatabaseConnection>,
) -> anyhow::Result<Arc<dyn LeadCacheRepository>> {
    let store: Arc<dyn LeadCacheRepository> = match settings.cache.backend {
        CacheBackend::Database => Arc::new(LeadCacheRepoImpl::new(db)),
        CacheBackend::Redis => {
            let url = settings
                .redis
                .url
                .as_deref()
                .context("redis.url is required when cache.backend = \"redis\"")?;
            let client = RedisClient::new(url).await?;
            Arc::new(RedisLeadCache::new(Arc::new(client)))
        }
        CacheBackend::Memory => Arc::new(MemoryLeadCache::new()),
    };
    Ok(store)
}
