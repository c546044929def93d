// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::models::project::Project;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Project visible to its owner only; `None` for someone else's project
    async fn find_for_user(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Project>, RepositoryError>;

    /// 调用方未归档的项目，按创建时间倒序
    async fn list_active(&self, user_id: Uuid) -> Result<Vec<Project>, RepositoryError>;

    async fn create(&self, project: &Project) -> Result<Project, RepositoryError>;

    /// 覆盖可编辑字段；项目不存在或不属于 `project.user_id` 时返回 `None`
    async fn update(&self, project: &Project) -> Result<Option<Project>, RepositoryError>;
}
