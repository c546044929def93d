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
    application::dto::lead_search_request::{LeadSearchRequestDto, LeadSearchResponseDto},
    domain::{
        repositories::project_repository::ProjectRepository,
        services::lead_search_service::{LeadSearchError, LeadSearchService},
    },
    presentation::{
        errors::{error_response, invalid_payload, validation_failed},
        extractors::user_id::UserId,
    },
};

/// 处理线索搜索请求
///
/// # 错误
///
/// - 400：请求体无效
/// - 404：项目不存在或不属于调用方
/// - 429：搜索提供方限流
/// - 500：其他搜索失败
pub async fn search_leads<PR>(
    Extension(service): Extension<Arc<LeadSearchService<PR>>>,
    UserId(user_id): UserId,
    payload: Result<Json<LeadSearchRequestDto>, JsonRejection>,
) -> Response
where
    PR: ProjectRepository + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_payload(rejection),
    };
    if let Err(errors) = payload.validate() {
        return validation_failed(errors);
    }

    match service
        .search_project(user_id, payload.project_id, payload.to_options())
        .await
    {
        Ok(outcome) => (
            StatusCode::OK,
            Json(LeadSearchResponseDto {
                results: outcome.results,
                cached: outcome.cached,
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            error_response(status, msg)
        }
    }
}

impl From<LeadSearchError> for (StatusCode, String) {
    fn from(err: LeadSearchError) -> Self {
        match err {
            LeadSearchError::RateLimited(_) => (
                StatusCode::TOO_MANY_REQUESTS,
                "Search provider rate-limited, try again soon.".to_string(),
            ),
            LeadSearchError::Validation(details) => (StatusCode::BAD_REQUEST, details),
            LeadSearchError::ProjectNotFound => {
                (StatusCode::NOT_FOUND, "Project not found".to_string())
            }
            LeadSearchError::Upstream(e) => {
                error!("lead search failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Lead search failed".to_string(),
                )
            }
            LeadSearchError::Repository(e) => {
                error!("lead search failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Lead search failed".to_string(),
                )
            }
        }
    }
}
