// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::JsonRejection, Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::dto::project_request::{
        CreateProjectRequestDto, ProjectEnvelopeDto, ProjectResponseDto, UpdateProjectRequestDto,
    },
    domain::{
        models::project::Project,
        repositories::project_repository::ProjectRepository,
        services::project_service::{ProjectError, ProjectService},
    },
    presentation::{
        errors::{error_response, invalid_payload, validation_failed},
        extractors::user_id::UserId,
    },
};

fn project_response(status: StatusCode, project: Project) -> Response {
    (
        status,
        Json(ProjectEnvelopeDto {
            project: project.into(),
        }),
    )
        .into_response()
}

fn failure(err: ProjectError) -> Response {
    let (status, msg): (StatusCode, String) = err.into();
    error_response(status, msg)
}

/// 列出调用方未归档的项目
pub async fn list_projects<PR>(
    Extension(service): Extension<Arc<ProjectService<PR>>>,
    UserId(user_id): UserId,
) -> Response
where
    PR: ProjectRepository + 'static,
{
    match service.list(user_id).await {
        Ok(projects) => {
            let body: Vec<ProjectResponseDto> = projects.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => failure(e),
    }
}

pub async fn create_project<PR>(
    Extension(service): Extension<Arc<ProjectService<PR>>>,
    UserId(user_id): UserId,
    payload: Result<Json<CreateProjectRequestDto>, JsonRejection>,
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

    match service.create(user_id, payload.into_new_project()).await {
        Ok(project) => project_response(StatusCode::CREATED, project),
        Err(e) => failure(e),
    }
}

pub async fn get_project<PR>(
    Extension(service): Extension<Arc<ProjectService<PR>>>,
    UserId(user_id): UserId,
    Path(project_id): Path<Uuid>,
) -> Response
where
    PR: ProjectRepository + 'static,
{
    match service.get(user_id, project_id).await {
        Ok(project) => project_response(StatusCode::OK, project),
        Err(e) => failure(e),
    }
}

pub async fn update_project<PR>(
    Extension(service): Extension<Arc<ProjectService<PR>>>,
    UserId(user_id): UserId,
    Path(project_id): Path<Uuid>,
    payload: Result<Json<UpdateProjectRequestDto>, JsonRejection>,
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

    match service.update(user_id, project_id, payload.into()).await {
        Ok(project) => project_response(StatusCode::OK, project),
        Err(e) => failure(e),
    }
}

impl From<ProjectError> for (StatusCode, String) {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ProjectError::EmptyUpdate => (
                StatusCode::BAD_REQUEST,
                "At least one field is required".to_string(),
            ),
            ProjectError::Repository(e) => {
                error!("project repository error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
