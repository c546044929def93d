// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::QueryRejection, Extension, Json, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::{
    application::dto::conversation_request::{
        ConversationEnvelopeDto, ConversationListQuery, ConversationListResponseDto,
    },
    domain::{
        repositories::{
            conversation_repository::ConversationRepository, project_repository::ProjectRepository,
        },
        services::conversation_discovery_service::ConversationDiscoveryService,
    },
    presentation::{errors::error_response, extractors::user_id::UserId},
};

/// 按项目列出会话，支持 `minRelevance` 与 `timeRange` 过滤
pub async fn list_conversations<PR, CR>(
    Extension(service): Extension<Arc<ConversationDiscoveryService<PR, CR>>>,
    UserId(user_id): UserId,
    query: Result<Query<ConversationListQuery>, QueryRejection>,
) -> Response
where
    PR: ProjectRepository + 'static,
    CR: ConversationRepository + 'static,
{
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            debug!("Rejected conversation query: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "Invalid query");
        }
    };
    let Some(project_id) = query.project_id else {
        return error_response(StatusCode::BAD_REQUEST, "Missing projectId");
    };

    match service
        .list_conversations(user_id, project_id, query.min_relevance(), query.time_range)
        .await
    {
        Ok(conversations) => (
            StatusCode::OK,
            Json(ConversationListResponseDto {
                conversations: conversations.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            error_response(status, msg)
        }
    }
}

pub async fn get_conversation<PR, CR>(
    Extension(service): Extension<Arc<ConversationDiscoveryService<PR, CR>>>,
    UserId(user_id): UserId,
    Path(conversation_id): Path<Uuid>,
) -> Response
where
    PR: ProjectRepository + 'static,
    CR: ConversationRepository + 'static,
{
    match service.get_conversation(user_id, conversation_id).await {
        Ok(conversation) => (
            StatusCode::OK,
            Json(ConversationEnvelopeDto {
                conversation: conversation.into(),
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            error_response(status, msg)
        }
    }
}
