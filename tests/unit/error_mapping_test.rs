// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use leadrs::domain::repositories::RepositoryError;
use leadrs::domain::search::engine::SearchError;
use leadrs::domain::services::conversation_discovery_service::DiscoveryError;
use leadrs::domain::services::lead_search_service::LeadSearchError;
use leadrs::domain::services::project_service::ProjectError;

fn status_of(err: LeadSearchError) -> (StatusCode, String) {
    err.into()
}

#[test]
fn test_lead_search_errors_map_to_statuses() {
    let rate_limited = LeadSearchError::from(SearchError::HttpStatus {
        status: 429,
        message: "slow down".to_string(),
    });
    assert_eq!(
        status_of(rate_limited),
        (
            StatusCode::TOO_MANY_REQUESTS,
            "Search provider rate-limited, try again soon.".to_string()
        )
    );

    let upstream = LeadSearchError::from(SearchError::Timeout);
    assert_eq!(
        status_of(upstream),
        (StatusCode::INTERNAL_SERVER_ERROR, "Lead search failed".to_string())
    );

    assert_eq!(
        status_of(LeadSearchError::ProjectNotFound).0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(LeadSearchError::Validation("sites".to_string())),
        (StatusCode::BAD_REQUEST, "sites".to_string())
    );
    assert_eq!(
        status_of(LeadSearchError::Repository(RepositoryError::Serialization("bad payload".to_string()))).0,
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_discovery_errors_map_to_statuses() {
    let (status, _): (StatusCode, String) = DiscoveryError::ProjectNotFound.into();
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, msg): (StatusCode, String) =
        DiscoveryError::Repository(RepositoryError::DatabaseError("disk full".to_string())).into();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(msg.contains("disk full"));

    let (status, _): (StatusCode, String) = DiscoveryError::ConversationNotFound.into();
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _): (StatusCode, String) = DiscoveryError::Forbidden.into();
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[test]
fn test_project_errors_map_to_statuses() {
    let (status, msg): (StatusCode, String) = ProjectError::NotFound.into();
    assert_eq!((status, msg.as_str()), (StatusCode::NOT_FOUND, "Not found"));

    let (status, msg): (StatusCode, String) = ProjectError::EmptyUpdate.into();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg, "At least one field is required");

    let (status, _): (StatusCode, String) =
        ProjectError::Repository(RepositoryError::DatabaseError("locked".to_string())).into();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
