// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::project::{Project, ProjectUpdate};
use crate::domain::services::project_service::NewProject;

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequestDto {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(length(min = 10))]
    pub product_description: String,
    #[validate(length(min = 1))]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub subreddits: Vec<String>,
}

impl CreateProjectRequestDto {
    pub fn into_new_project(self) -> NewProject {
        NewProject {
            name: self.name,
            product_description: self.product_description,
            keywords: self.keywords,
            subreddits: self.subreddits,
        }
    }
}

/// 部分更新，至少提供一个字段
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequestDto {
    #[validate(length(min = 3))]
    pub name: Option<String>,
    #[validate(length(min = 6))]
    pub product_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub subreddits: Option<Vec<String>>,
}

impl From<UpdateProjectRequestDto> for ProjectUpdate {
    fn from(dto: UpdateProjectRequestDto) -> Self {
        Self {
            name: dto.name,
            product_description: dto.product_description,
            keywords: dto.keywords,
            subreddits: dto.subreddits,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponseDto {
    pub id: Uuid,
    pub name: String,
    pub product_description: String,
    pub keywords: Vec<String>,
    pub subreddits: Vec<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponseDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            product_description: project.product_description,
            keywords: project.keywords,
            subreddits: project.subreddits,
            is_archived: project.is_archived,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectEnvelopeDto {
    pub project: ProjectResponseDto,
}
