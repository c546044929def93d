// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const USER_HEADER: &str = "X-User-Id";

#[tokio::test]
async fn test_health_and_version() {
    let app = create_test_app().await;

    let health = app.server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.text(), "OK");

    let version = app.server.get("/v1/version").await;
    assert_eq!(version.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_missing_or_invalid_user_header_is_unauthorized() {
    let app = create_test_app().await;
    let body = json!({ "projectId": app.project.id });

    let missing = app.server.post("/v1/leads/search").json(&body).await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);

    let invalid = app
        .server
        .post("/v1/leads/search")
        .add_header(USER_HEADER, "not-a-uuid")
        .json(&body)
        .await;
    assert_eq!(invalid.status_code(), StatusCode::UNAUTHORIZED);
    let error: Value = invalid.json();
    assert!(error["error"].as_str().unwrap().contains("X-User-Id"));
}

#[tokio::test]
async fn test_search_for_unknown_project_is_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/leads/search")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({ "projectId": Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["error"], "Project not found");
}

#[tokio::test]
async fn test_search_rejects_bad_payloads() {
    let app = create_test_app().await;

    let empty_sites = app
        .server
        .post("/v1/leads/search")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({ "projectId": app.project.id, "sites": [] }))
        .await;
    assert_eq!(empty_sites.status_code(), StatusCode::BAD_REQUEST);

    let bad_limit = app
        .server
        .post("/v1/leads/search")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({ "projectId": app.project.id, "limit": 15 }))
        .await;
    assert_eq!(bad_limit.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = bad_limit.json();
    assert_eq!(error["error"], "Invalid payload");
}

#[tokio::test]
async fn test_search_ranks_and_then_serves_from_cache() {
    let app = create_test_app().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [
                {
                    "link": "https://reddit.com/r/startups/comments/abc",
                    "title": "Need help with scheduling AI for ops team",
                    "snippet": ""
                },
                {
                    "link": "https://example.com/pricing",
                    "title": "Pricing",
                    "snippet": "Plans for every team"
                }
            ]
        })))
        .expect(1)
        .mount(&app.serpapi)
        .await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "bing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [
                {
                    "link": "https://reddit.com/r/startups/comments/abc?utm=bing",
                    "title": "Need help with scheduling AI for ops team",
                    "snippet": ""
                }
            ]
        })))
        .expect(1)
        .mount(&app.serpapi)
        .await;

    let request = json!({
        "projectId": app.project.id,
        "sites": ["reddit", "hackernews"],
        "timeWindow": "7",
        "limit": 5
    });

    let first = app
        .server
        .post("/v1/leads/search")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&request)
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let body: Value = first.json();
    assert_eq!(body["cached"], false);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["engine"], "google");
    assert_eq!(results[0]["score"], 65);
    assert_eq!(results[0]["threadLike"], true);
    assert_eq!(results[0]["source"], "Reddit");
    assert_eq!(results[0]["id"].as_str().unwrap().len(), 40);

    let second = app
        .server
        .post("/v1/leads/search")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&request)
        .await;
    let cached: Value = second.json();
    assert_eq!(cached["cached"], true);
    assert_eq!(cached["results"], body["results"]);
}

#[tokio::test]
async fn test_rate_limited_search_returns_429() {
    let app = create_test_app().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&app.serpapi)
        .await;

    let response = app
        .server
        .post("/v1/leads/search")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({ "projectId": app.project.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    let error: Value = response.json();
    assert_eq!(error["error"], "Search provider rate-limited, try again soon.");
}

#[tokio::test]
async fn test_save_lead_is_idempotent_per_url() {
    let app = create_test_app().await;
    let lead = json!({
        "projectId": app.project.id,
        "url": "https://news.ycombinator.com/item?id=42",
        "title": "Ask HN: scheduling for ops teams?",
        "snippet": "Looking for something lightweight",
        "score": 71.6,
        "source": "Hacker News",
        "publishedAt": "2026-10-01T12:00:00Z"
    });

    let first = app
        .server
        .post("/v1/leads/save")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&lead)
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let body: Value = first.json();
    assert_eq!(body["message"], "saved");

    let second = app
        .server
        .post("/v1/leads/save")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&lead)
        .await;
    let body: Value = second.json();
    assert_eq!(body["message"], "already saved");
}

#[tokio::test]
async fn test_save_lead_validates_fields() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/leads/save")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({
            "projectId": app.project.id,
            "url": "not a url",
            "title": "Hi",
            "snippet": "short",
            "score": 140,
            "source": "Web"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_discover_stores_reddit_posts() {
    let app = create_test_app().await;
    let listing = json!({
        "data": {
            "children": [
                { "data": {
                    "id": "xyz123",
                    "title": "Any tool for scheduling ai in an ops team?",
                    "selftext": "",
                    "url": "https://www.reddit.com/r/startups/comments/xyz123",
                    "author": "founder42",
                    "subreddit": "startups",
                    "created_utc": 1_760_000_000.0,
                    "score": 5,
                    "num_comments": 3
                } }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/r/startups/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(&app.reddit)
        .await;
    Mock::given(method("GET"))
        .and(path("/r/smallbusiness/search.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.reddit)
        .await;

    let response = app
        .server
        .post("/v1/conversations/discover")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({ "projectId": app.project.id, "timeRange": "month" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let summary: Value = response.json();
    assert_eq!(summary["totalFound"], 1);
    assert_eq!(summary["conversationsAdded"], 1);

    // saving the same post again is recognised by url
    let save = app
        .server
        .post("/v1/leads/save")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({
            "projectId": app.project.id,
            "url": "https://www.reddit.com/r/startups/comments/xyz123",
            "title": "Any tool for scheduling ai in an ops team?",
            "snippet": "Saved from discovery",
            "score": 40,
            "source": "Reddit"
        }))
        .await;
    let body: Value = save.json();
    assert_eq!(body["message"], "already saved");
}

#[tokio::test]
async fn test_discover_for_someone_elses_project_is_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/conversations/discover")
        .add_header(USER_HEADER, Uuid::new_v4().to_string())
        .json(&json!({ "projectId": app.project.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_project_lifecycle() {
    let app = create_test_app().await;
    let user = app.user_id.to_string();

    let created = app
        .server
        .post("/v1/projects")
        .add_header(USER_HEADER, user.clone())
        .json(&json!({
            "name": "Invoicely",
            "productDescription": "Invoice automation for freelancers",
            "keywords": ["invoicing", " late payments "],
            "subreddits": ["r/freelance", "smallbusiness"]
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let body: Value = created.json();
    let project = &body["project"];
    let project_id = project["id"].as_str().unwrap().to_string();
    assert_eq!(project["keywords"], json!(["invoicing", "late payments"]));
    assert_eq!(project["subreddits"], json!(["freelance", "smallbusiness"]));
    assert_eq!(project["isArchived"], false);

    let listed = app
        .server
        .get("/v1/projects")
        .add_header(USER_HEADER, user.clone())
        .await;
    assert_eq!(listed.status_code(), StatusCode::OK);
    let projects: Value = listed.json();
    let ids: Vec<&str> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&project_id.as_str()));

    let updated = app
        .server
        .put(&format!("/v1/projects/{}", project_id))
        .add_header(USER_HEADER, user.clone())
        .json(&json!({ "name": "Invoicely Pro" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let body: Value = updated.json();
    assert_eq!(body["project"]["name"], "Invoicely Pro");
    assert_eq!(body["project"]["keywords"], json!(["invoicing", "late payments"]));

    let fetched = app
        .server
        .get(&format!("/v1/projects/{}", project_id))
        .add_header(USER_HEADER, user.clone())
        .await;
    let body: Value = fetched.json();
    assert_eq!(body["project"]["name"], "Invoicely Pro");

    let stranger = app
        .server
        .get(&format!("/v1/projects/{}", project_id))
        .add_header(USER_HEADER, Uuid::new_v4().to_string())
        .await;
    assert_eq!(stranger.status_code(), StatusCode::NOT_FOUND);

    let empty_update = app
        .server
        .put(&format!("/v1/projects/{}", project_id))
        .add_header(USER_HEADER, user.clone())
        .json(&json!({}))
        .await;
    assert_eq!(empty_update.status_code(), StatusCode::BAD_REQUEST);

    let unknown = app
        .server
        .put(&format!("/v1/projects/{}", Uuid::new_v4()))
        .add_header(USER_HEADER, user)
        .json(&json!({ "name": "Renamed" }))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_project_validates_payload() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/projects")
        .add_header(USER_HEADER, app.user_id.to_string())
        .json(&json!({
            "name": "AI",
            "productDescription": "short",
            "keywords": []
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["error"].as_str().unwrap().starts_with("Invalid payload"));
}

#[tokio::test]
async fn test_created_project_is_usable_for_discovery_and_listing() {
    let app = create_test_app().await;
    let user = app.user_id.to_string();

    let created = app
        .server
        .post("/v1/projects")
        .add_header(USER_HEADER, user.clone())
        .json(&json!({
            "name": "Shiftly",
            "productDescription": "AI scheduling assistant for operations teams",
            "keywords": ["scheduling"],
            "subreddits": ["r/operations"]
        }))
        .await;
    let body: Value = created.json();
    let project_id = body["project"]["id"].as_str().unwrap().to_string();

    let fresh = chrono::Utc::now().timestamp() as f64;
    let listing = json!({
        "data": { "children": [
            { "data": {
                "id": "old1",
                "title": "Quarterly review thread",
                "selftext": "",
                "url": "https://www.reddit.com/r/operations/comments/old1",
                "author": "ops_lead",
                "created_utc": 1_600_000_000.0,
                "score": 40,
                "num_comments": 12
            } },
            { "data": {
                "id": "fresh1",
                "title": "Scheduling is eating my week",
                "selftext": null,
                "url": "https://www.reddit.com/r/operations/comments/fresh1",
                "author": "founder42",
                "created_utc": fresh,
                "score": 3,
                "num_comments": 1
            } }
        ] }
    });
    Mock::given(method("GET"))
        .and(path("/r/operations/search.json"))
        .and(query_param("q", "scheduling"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .expect(1)
        .mount(&app.reddit)
        .await;

    let discovered = app
        .server
        .post("/v1/conversations/discover")
        .add_header(USER_HEADER, user.clone())
        .json(&json!({ "projectId": project_id, "timeRange": "all" }))
        .await;
    assert_eq!(discovered.status_code(), StatusCode::OK);
    let summary: Value = discovered.json();
    assert_eq!(summary["totalFound"], 2);

    let all = app
        .server
        .get("/v1/conversations")
        .add_header(USER_HEADER, user.clone())
        .add_query_param("projectId", &project_id)
        .await;
    assert_eq!(all.status_code(), StatusCode::OK);
    let body: Value = all.json();
    let conversations = body["conversations"].as_array().unwrap();
    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[0]["externalId"], "fresh1");
    assert_eq!(conversations[0]["relevanceScore"], 18);
    assert_eq!(conversations[1]["relevanceScore"], 0);
    let fresh_id = conversations[0]["id"].as_str().unwrap().to_string();

    let relevant = app
        .server
        .get("/v1/conversations")
        .add_header(USER_HEADER, user.clone())
        .add_query_param("projectId", &project_id)
        .add_query_param("minRelevance", "10")
        .await;
    let body: Value = relevant.json();
    assert_eq!(body["conversations"].as_array().unwrap().len(), 1);

    let recent = app
        .server
        .get("/v1/conversations")
        .add_header(USER_HEADER, user.clone())
        .add_query_param("projectId", &project_id)
        .add_query_param("timeRange", "month")
        .await;
    let body: Value = recent.json();
    let recent = body["conversations"].as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["externalId"], "fresh1");

    let single = app
        .server
        .get(&format!("/v1/conversations/{}", fresh_id))
        .add_header(USER_HEADER, user.clone())
        .await;
    assert_eq!(single.status_code(), StatusCode::OK);
    let body: Value = single.json();
    assert_eq!(body["conversation"]["author"], "founder42");

    let forbidden = app
        .server
        .get(&format!("/v1/conversations/{}", fresh_id))
        .add_header(USER_HEADER, Uuid::new_v4().to_string())
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    let missing = app
        .server
        .get(&format!("/v1/conversations/{}", Uuid::new_v4()))
        .add_header(USER_HEADER, user.clone())
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let no_project = app
        .server
        .get("/v1/conversations")
        .add_header(USER_HEADER, user)
        .await;
    assert_eq!(no_project.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = no_project.json();
    assert_eq!(error["error"], "Missing projectId");
}
