// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::test_db;
use chrono::{Duration, Utc};
use leadrs::domain::models::cache_entry::{CachedLeadPayload, LeadCacheEntry};
use leadrs::domain::repositories::lead_cache_repository::LeadCacheRepository;
use leadrs::infrastructure::cache::cache_manager::LeadCacheManager;
use leadrs::infrastructure::repositories::lead_cache_repo_impl::LeadCacheRepoImpl;
use std::sync::Arc;
use uuid::Uuid;

fn payload(query: &str) -> CachedLeadPayload {
    CachedLeadPayload {
        results: Vec::new(),
        query: query.to_string(),
    }
}

#[tokio::test]
async fn test_upsert_overwrites_same_key() {
    let (db, _dir) = test_db().await;
    let repo = LeadCacheRepoImpl::new(db);
    let user_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();
    let now = Utc::now();

    let mut entry = LeadCacheEntry {
        user_id,
        project_id,
        cache_key: "abc".to_string(),
        payload: payload("first"),
        expires_at: now + Duration::hours(6),
    };
    repo.upsert(&entry).await.unwrap();

    entry.payload = payload("second");
    repo.upsert(&entry).await.unwrap();

    let found = repo
        .find_fresh(user_id, project_id, "abc", now)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.payload.query, "second");

    // keys are scoped to the caller
    let other = repo
        .find_fresh(Uuid::new_v4(), project_id, "abc", now)
        .await
        .unwrap();
    assert!(other.is_none());
}

#[tokio::test]
async fn test_database_cache_respects_ttl() {
    let (db, _dir) = test_db().await;
    let manager = LeadCacheManager::new(Arc::new(LeadCacheRepoImpl::new(db)));
    let user_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();
    let written_at = Utc::now();

    assert!(
        manager
            .set(user_id, project_id, "k", payload("q"), written_at)
            .await
    );

    let fresh = manager
        .get(user_id, project_id, "k", written_at + Duration::hours(1))
        .await;
    assert_eq!(fresh, Some(payload("q")));

    let stale = manager
        .get(user_id, project_id, "k", written_at + Duration::hours(7))
        .await;
    assert!(stale.is_none());
}
