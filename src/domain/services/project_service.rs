// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::project::{
    normalize_keywords, normalize_subreddits, Project, ProjectUpdate,
};
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::RepositoryError;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Project not found")]
    NotFound,
    #[error("At least one field is required")]
    EmptyUpdate,
}

/// 新建项目的输入
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub product_description: String,
    pub keywords: Vec<String>,
    pub subreddits: Vec<String>,
}

/// 项目管理服务
pub struct ProjectService<PR> {
    project_repo: Arc<PR>,
}

impl<PR> ProjectService<PR>
where
    PR: ProjectRepository + 'static,
{
    pub fn new(project_repo: Arc<PR>) -> Self {
        Self { project_repo }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Project>, ProjectError> {
        Ok(self.project_repo.list_active(user_id).await?)
    }

    pub async fn create(&self, user_id: Uuid, input: NewProject) -> Result<Project, ProjectError> {
        let project = Project::new(user_id, input.name.trim(), input.product_description.trim())
            .with_keywords(normalize_keywords(input.keywords))
            .with_subreddits(normalize_subreddits(input.subreddits));

        let project = self.project_repo.create(&project).await?;
        info!("Created project {} for user {}", project.id, user_id);
        Ok(project)
    }

    pub async fn get(&self, user_id: Uuid, project_id: Uuid) -> Result<Project, ProjectError> {
        self.project_repo
            .find_for_user(project_id, user_id)
            .await?
            .ok_or(ProjectError::NotFound)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        update: ProjectUpdate,
    ) -> Result<Project, ProjectError> {
        if update.is_empty() {
            return Err(ProjectError::EmptyUpdate);
        }

        let mut project = self.get(user_id, project_id).await?;
        project.apply(update, Utc::now());

        self.project_repo
            .update(&project)
            .await?
            .ok_or(ProjectError::NotFound)
    }
}
