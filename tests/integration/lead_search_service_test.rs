// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{sample_project, BrokenCache, InMemoryProjects, StaticEngine};
use leadrs::domain::models::lead::{EngineKind, NormalizedHit};
use leadrs::domain::models::search_config::{LeadSearchOptions, LeadSite, ResultLimit};
use leadrs::domain::search::engine::{SearchEngine, SearchError};
use leadrs::domain::services::lead_search_service::{LeadSearchError, LeadSearchService};
use leadrs::infrastructure::cache::cache_manager::LeadCacheManager;
use leadrs::infrastructure::cache::memory_lead_cache::MemoryLeadCache;
use leadrs::infrastructure::search::aggregator::SearchAggregator;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn scenario_hits() -> (Vec<NormalizedHit>, Vec<NormalizedHit>) {
    let google = vec![NormalizedHit::new(
        "https://reddit.com/r/startups/comments/abc?utm_source=google",
        "Need help with scheduling AI for ops team",
        "We run a 40 person ops team and shifts are a mess",
        EngineKind::Google,
    )];
    let bing = vec![
        NormalizedHit::new(
            "https://reddit.com/r/startups/comments/abc?ref=bing",
            "Need help with scheduling AI for ops team",
            "duplicate from another engine",
            EngineKind::Bing,
        ),
        NormalizedHit::new(
            "https://blog.example.com/how-i-built-a-scheduler",
            "How I built a scheduling AI: a guide",
            "A tutorial on shift planning",
            EngineKind::Bing,
        ),
    ];
    (google, bing)
}

fn service(
    engines: Vec<Arc<dyn SearchEngine>>,
    cache: Arc<LeadCacheManager>,
) -> (LeadSearchService<InMemoryProjects>, Uuid, Uuid) {
    let user_id = Uuid::new_v4();
    let project = sample_project(user_id);
    let project_id = project.id;
    let aggregator = Arc::new(SearchAggregator::new(engines, Duration::from_secs(2)));
    let service = LeadSearchService::new(InMemoryProjects::with(project), aggregator, cache);
    (service, user_id, project_id)
}

fn memory_cache() -> Arc<LeadCacheManager> {
    Arc::new(LeadCacheManager::new(Arc::new(MemoryLeadCache::new())))
}

#[tokio::test]
async fn test_end_to_end_ranking_scenario() {
    let (google_hits, bing_hits) = scenario_hits();
    let google = StaticEngine::with_hits(EngineKind::Google, google_hits);
    let bing = StaticEngine::with_hits(EngineKind::Bing, bing_hits);
    let (service, user_id, project_id) = service(vec![google, bing], memory_cache());

    let options = LeadSearchOptions {
        sites: vec![LeadSite::Reddit, LeadSite::Hackernews],
        ..LeadSearchOptions::default()
    };
    let outcome = service
        .search_project(user_id, project_id, options)
        .await
        .unwrap();

    assert!(!outcome.cached);
    assert!(outcome.query.contains("site:reddit.com"));
    assert!(outcome.query.contains("site:news.ycombinator.com"));
    assert_eq!(outcome.results.len(), 2);

    let lead = &outcome.results[0];
    assert_eq!(lead.engine, EngineKind::Google);
    assert!(lead.thread_like);
    assert_eq!(lead.source, "Reddit");
    assert_eq!(lead.score, 65);
    assert_eq!(lead.keywords_matched, vec!["scheduling ai", "ops team"]);

    let article = &outcome.results[1];
    assert!(article.is_article);
    assert_eq!(article.score, 0);
}

#[tokio::test]
async fn test_second_search_is_served_from_cache() {
    let (google_hits, _) = scenario_hits();
    let google = StaticEngine::with_hits(EngineKind::Google, google_hits);
    let (service, user_id, project_id) = service(vec![google.clone()], memory_cache());

    let first = service
        .search_project(user_id, project_id, LeadSearchOptions::default())
        .await
        .unwrap();
    let second = service
        .search_project(user_id, project_id, LeadSearchOptions::default())
        .await
        .unwrap();

    assert!(!first.cached);
    assert!(second.cached);
    assert_eq!(first.results, second.results);
    assert_eq!(first.query, second.query);
    assert_eq!(google.calls(), 1);
}

#[tokio::test]
async fn test_force_refresh_bypasses_cache() {
    let (google_hits, _) = scenario_hits();
    let google = StaticEngine::with_hits(EngineKind::Google, google_hits);
    let (service, user_id, project_id) = service(vec![google.clone()], memory_cache());

    service
        .search_project(user_id, project_id, LeadSearchOptions::default())
        .await
        .unwrap();
    let refreshed = service
        .search_project(
            user_id,
            project_id,
            LeadSearchOptions {
                force_refresh: true,
                ..LeadSearchOptions::default()
            },
        )
        .await
        .unwrap();

    assert!(!refreshed.cached);
    assert_eq!(google.calls(), 2);
}

#[tokio::test]
async fn test_different_options_do_not_share_cache() {
    let (google_hits, _) = scenario_hits();
    let google = StaticEngine::with_hits(EngineKind::Google, google_hits);
    let (service, user_id, project_id) = service(vec![google.clone()], memory_cache());

    service
        .search_project(user_id, project_id, LeadSearchOptions::default())
        .await
        .unwrap();
    let five = service
        .search_project(
            user_id,
            project_id,
            LeadSearchOptions {
                limit: ResultLimit::Five,
                ..LeadSearchOptions::default()
            },
        )
        .await
        .unwrap();

    assert!(!five.cached);
    assert_eq!(google.calls(), 2);
}

#[tokio::test]
async fn test_broken_cache_does_not_fail_search() {
    let (google_hits, _) = scenario_hits();
    let google = StaticEngine::with_hits(EngineKind::Google, google_hits);
    let cache = Arc::new(LeadCacheManager::new(Arc::new(BrokenCache)));
    let (service, user_id, project_id) = service(vec![google.clone()], cache);

    for _ in 0..2 {
        let outcome = service
            .search_project(user_id, project_id, LeadSearchOptions::default())
            .await
            .unwrap();
        assert!(!outcome.cached);
        assert_eq!(outcome.results.len(), 1);
    }
    assert_eq!(google.calls(), 2);
}

#[tokio::test]
async fn test_rate_limited_provider_maps_to_rate_limited() {
    let google = StaticEngine::failing(
        EngineKind::Google,
        SearchError::HttpStatus {
            status: 429,
            message: "Too Many Requests".to_string(),
        },
    );
    let (service, user_id, project_id) = service(vec![google], memory_cache());

    let err = service
        .search_project(user_id, project_id, LeadSearchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LeadSearchError::RateLimited(_)));
}

#[tokio::test]
async fn test_other_provider_failure_is_upstream() {
    let google = StaticEngine::failing(
        EngineKind::Google,
        SearchError::HttpStatus {
            status: 500,
            message: "boom".to_string(),
        },
    );
    let (service, user_id, project_id) = service(vec![google], memory_cache());

    let err = service
        .search_project(user_id, project_id, LeadSearchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LeadSearchError::Upstream(_)));
}

#[tokio::test]
async fn test_failing_engine_is_isolated() {
    let (google_hits, _) = scenario_hits();
    let google = StaticEngine::with_hits(EngineKind::Google, google_hits);
    let bing = StaticEngine::failing(EngineKind::Bing, SearchError::Timeout);
    let (service, user_id, project_id) = service(vec![google, bing], memory_cache());

    let outcome = service
        .search_project(user_id, project_id, LeadSearchOptions::default())
        .await
        .unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].engine, EngineKind::Google);
}

#[tokio::test]
async fn test_empty_sites_is_validation_error() {
    let google = StaticEngine::with_hits(EngineKind::Google, Vec::new());
    let (service, user_id, project_id) = service(vec![google.clone()], memory_cache());

    let err = service
        .search_project(
            user_id,
            project_id,
            LeadSearchOptions {
                sites: Vec::new(),
                ..LeadSearchOptions::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, LeadSearchError::Validation(_)));
    assert_eq!(google.calls(), 0);
}

#[tokio::test]
async fn test_other_users_project_is_not_found() {
    let google = StaticEngine::with_hits(EngineKind::Google, Vec::new());
    let (service, _user_id, project_id) = service(vec![google], memory_cache());

    let err = service
        .search_project(Uuid::new_v4(), project_id, LeadSearchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LeadSearchError::ProjectNotFound));
}

#[tokio::test]
async fn test_repeated_sites_share_query_and_cache() {
    let (google_hits, _) = scenario_hits();
    let google = StaticEngine::with_hits(EngineKind::Google, google_hits);
    let (service, user_id, project_id) = service(vec![google.clone()], memory_cache());

    let repeated = service
        .search_project(
            user_id,
            project_id,
            LeadSearchOptions {
                sites: vec![LeadSite::Reddit, LeadSite::Reddit],
                ..LeadSearchOptions::default()
            },
        )
        .await
        .unwrap();
    let single = service
        .search_project(
            user_id,
            project_id,
            LeadSearchOptions {
                sites: vec![LeadSite::Reddit],
                ..LeadSearchOptions::default()
            },
        )
        .await
        .unwrap();

    assert!(repeated.query.ends_with("(site:reddit.com)"));
    assert!(single.cached);
    assert_eq!(google.calls(), 1);
}
