// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::domain::models::project::Project;
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::project;

/// 项目仓库实现
#[derive(Clone)]
pub struct ProjectRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepoImpl {
    async fn find_for_user(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Project>, RepositoryError> {
        let model = project::Entity::find_by_id(project_id)
            .filter(project::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await?;

        model.map(Project::try_from).transpose()
    }

    async fn list_active(&self, user_id: Uuid) -> Result<Vec<Project>, RepositoryError> {
        let models = project::Entity::find()
            .filter(project::Column::UserId.eq(user_id))
            .filter(project::Column::IsArchived.eq(false))
            .order_by_desc(project::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(Project::try_from).collect()
    }

    async fn create(&self, project: &Project) -> Result<Project, RepositoryError> {
        let model = project::ActiveModel {
            id: Set(project.id),
            user_id: Set(project.user_id),
            name: Set(project.name.clone()),
            product_description: Set(project.product_description.clone()),
            keywords: Set(serde_json::to_value(&project.keywords)?),
            subreddits: Set(serde_json::to_value(&project.subreddits)?),
            is_archived: Set(project.is_archived),
            created_at: Set(project.created_at.into()),
            updated_at: Set(project.updated_at.into()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(project.clone())
    }

    async fn update(&self, project: &Project) -> Result<Option<Project>, RepositoryError> {
        let Some(existing) = project::Entity::find_by_id(project.id)
            .filter(project::Column::UserId.eq(project.user_id))
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let mut model: project::ActiveModel = existing.into();
        model.name = Set(project.name.clone());
        model.product_description = Set(project.product_description.clone());
        model.keywords = Set(serde_json::to_value(&project.keywords)?);
        model.subreddits = Set(serde_json::to_value(&project.subreddits)?);
        model.updated_at = Set(project.updated_at.into());

        let updated = model.update(self.db.as_ref()).await?;
        Project::try_from(updated).map(Some)
    }
}

impl TryFrom<project::Model> for Project {
    type Error = RepositoryError;

    fn try_from(model: project::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            product_description: model.product_description,
            keywords: serde_json::from_value(model.keywords)?,
            subreddits: serde_json::from_value(model.subreddits)?,
            is_archived: model.is_archived,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}
