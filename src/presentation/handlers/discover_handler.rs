// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

use crate::{
    application::dto::discover_request::DiscoverRequestDto,
    domain::{
        repositories::{
            conversation_repository::ConversationRepository, project_repository::ProjectRepository,
        },
        services::conversation_discovery_service::{ConversationDiscoveryService, DiscoveryError},
    },
    presentation::{
        errors::{error_response, invalid_payload},
        extractors::user_id::UserId,
    },
};

/// 对项目的子版块执行 Reddit 站内发现
pub async fn discover_conversations<PR, CR>(
    Extension(service): Extension<Arc<ConversationDiscoveryService<PR, CR>>>,
    UserId(user_id): UserId,
    payload: Result<Json<DiscoverRequestDto>, JsonRejection>,
) -> Response
where
    PR: ProjectRepository + 'static,
    CR: ConversationRepository + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_payload(rejection),
    };

    match service
        .discover_for_project(user_id, payload.project_id, payload.time_range)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            error_response(status, msg)
        }
    }
}

impl From<DiscoveryError> for (StatusCode, String) {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::ProjectNotFound => {
                (StatusCode::NOT_FOUND, "Project not found".to_string())
            }
            DiscoveryError::ConversationNotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            DiscoveryError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            DiscoveryError::Repository(e) => {
                error!("conversation repository error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
