// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::test_db;
use chrono::{Duration, Utc};
use leadrs::domain::models::conversation::{
    Conversation, ConversationFilter, LeadToSave, PLATFORM_REDDIT, PLATFORM_WEB,
};
use leadrs::domain::models::reddit_post::RedditSearchResult;
use leadrs::domain::repositories::conversation_repository::ConversationRepository;
use leadrs::infrastructure::database::entities::conversation;
use leadrs::infrastructure::repositories::conversation_repo_impl::ConversationRepoImpl;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

fn reddit_result(id: &str, title: &str) -> RedditSearchResult {
    RedditSearchResult {
        external_id: id.to_string(),
        url: format!("https://www.reddit.com/r/startups/comments/{}", id),
        title: title.to_string(),
        author: "founder42".to_string(),
        subreddit: "startups".to_string(),
        created_at: Utc::now(),
        score: 10,
        num_comments: 2,
        excerpt: "excerpt".to_string(),
        relevance_score: 36,
    }
}

#[tokio::test]
async fn test_rediscovery_updates_instead_of_duplicating() {
    let (db, _dir) = test_db().await;
    let repo = ConversationRepoImpl::new(db.clone());
    let user_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    let written = repo
        .upsert_discovered(
            user_id,
            project_id,
            &[reddit_result("a1", "First"), reddit_result("b2", "Second")],
        )
        .await
        .unwrap();
    assert_eq!(written, 2);

    repo.upsert_discovered(user_id, project_id, &[reddit_result("a1", "First, edited")])
        .await
        .unwrap();

    let total = conversation::Entity::find().count(db.as_ref()).await.unwrap();
    assert_eq!(total, 2);

    let edited = repo
        .find_by_url(
            user_id,
            project_id,
            "https://www.reddit.com/r/startups/comments/a1",
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(edited.title, "First, edited");
    assert_eq!(edited.platform, PLATFORM_REDDIT);
    assert_eq!(edited.external_id.as_deref(), Some("a1"));
}

#[tokio::test]
async fn test_empty_batch_writes_nothing() {
    let (db, _dir) = test_db().await;
    let repo = ConversationRepoImpl::new(db);

    let written = repo
        .upsert_discovered(Uuid::new_v4(), Uuid::new_v4(), &[])
        .await
        .unwrap();
    assert_eq!(written, 0);
}

#[tokio::test]
async fn test_saved_lead_round_trip() {
    let (db, _dir) = test_db().await;
    let repo = ConversationRepoImpl::new(db);
    let user_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();
    let now = Utc::now();

    let lead = LeadToSave {
        url: "https://news.ycombinator.com/item?id=42".to_string(),
        title: "Ask HN: scheduling tools?".to_string(),
        snippet: "Looking for something lightweight".to_string(),
        score: 72,
        source: "Hacker News".to_string(),
        published_at: None,
    };
    let conversation = Conversation::from_saved_lead(user_id, project_id, lead, now);
    repo.insert(&conversation).await.unwrap();

    let found = repo
        .find_by_url(user_id, project_id, "https://news.ycombinator.com/item?id=42")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.platform, PLATFORM_WEB);
    assert_eq!(found.score, 72);
    assert_eq!(found.relevance_score, 72);
    assert_eq!(found.source.as_deref(), Some("Hacker News"));
    assert!(found.external_id.is_none());

    let other_user = repo
        .find_by_url(Uuid::new_v4(), project_id, "https://news.ycombinator.com/item?id=42")
        .await
        .unwrap();
    assert!(other_user.is_none());
}

#[tokio::test]
async fn test_list_for_project_filters_and_orders_by_relevance() {
    let (db, _dir) = test_db().await;
    let repo = ConversationRepoImpl::new(db);
    let user_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    let mut low = reddit_result("low", "Low relevance");
    low.relevance_score = 18;
    let high = reddit_result("high", "High relevance");
    let mut stale = reddit_result("stale", "Old but relevant");
    stale.relevance_score = 90;
    stale.created_at = Utc::now() - Duration::days(400);

    repo.upsert_discovered(user_id, project_id, &[low, high, stale])
        .await
        .unwrap();
    repo.upsert_discovered(user_id, Uuid::new_v4(), &[reddit_result("elsewhere", "Other project")])
        .await
        .unwrap();

    let all = repo
        .list_for_project(project_id, ConversationFilter::default())
        .await
        .unwrap();
    let ids: Vec<&str> = all.iter().filter_map(|c| c.external_id.as_deref()).collect();
    assert_eq!(ids, vec!["stale", "high", "low"]);

    let relevant = repo
        .list_for_project(
            project_id,
            ConversationFilter {
                min_relevance: Some(36),
                since: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(relevant.len(), 2);

    let recent = repo
        .list_for_project(
            project_id,
            ConversationFilter {
                min_relevance: Some(36),
                since: Some(Utc::now() - Duration::days(30)),
            },
        )
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].external_id.as_deref(), Some("high"));

    let found = repo.find_by_id(recent[0].id).await.unwrap().unwrap();
    assert_eq!(found.title, "High relevance");
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}
