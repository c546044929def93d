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
use validator::Validate;

use crate::{
    application::dto::save_lead_request::{SaveLeadRequestDto, SaveLeadResponseDto},
    domain::{
        repositories::{
            conversation_repository::ConversationRepository, project_repository::ProjectRepository,
        },
        services::conversation_discovery_service::{ConversationDiscoveryService, DiscoveryError},
    },
    presentation::{
        errors::{error_response, invalid_payload, validation_failed},
        extractors::user_id::UserId,
    },
};

/// 保存一条线索为会话
pub async fn save_lead<PR, CR>(
    Extension(service): Extension<Arc<ConversationDiscoveryService<PR, CR>>>,
    UserId(user_id): UserId,
    payload: Result<Json<SaveLeadRequestDto>, JsonRejection>,
) -> Response
where
    PR: ProjectRepository + 'static,
    CR: ConversationRepository + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_payload(rejection),
    };
    if let Err(errors) = payload.validate() {
        return validation_failed(errors);
    }

    let project_id = payload.project_id;
    match service.save_lead(user_id, project_id, payload.into_lead()).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SaveLeadResponseDto {
                message: outcome.message().to_string(),
            }),
        )
            .into_response(),
        Err(DiscoveryError::Repository(e)) => {
            error!("save lead conversation error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Unable to save lead")
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            error_response(status, msg)
        }
    }
}
