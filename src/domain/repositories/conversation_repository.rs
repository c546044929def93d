// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::models::conversation::{Conversation, ConversationFilter};
use crate::domain::models::reddit_post::RedditSearchResult;

/// 会话仓库特质
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// 按 (project_id, external_id) 批量写入 Reddit 结果，返回写入行数
    async fn upsert_discovered(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        results: &[RedditSearchResult],
    ) -> Result<u64, RepositoryError>;

    /// 根据URL查找调用方在该项目下的会话
    async fn find_by_url(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        url: &str,
    ) -> Result<Option<Conversation>, RepositoryError>;

    /// 插入新会话
    async fn insert(&self, conversation: &Conversation) -> Result<Conversation, RepositoryError>;

    /// 项目下的会话，按 `relevance_score` 降序
    async fn list_for_project(
        &self,
        project_id: Uuid,
        filter: ConversationFilter,
    ) -> Result<Vec<Conversation>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Conversation>, RepositoryError>;
}
