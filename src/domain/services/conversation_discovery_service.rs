// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::conversation::{
    Conversation, ConversationFilter, DiscoverySummary, LeadToSave, SaveLeadOutcome,
};
use crate::domain::models::project::Project;
use crate::domain::models::reddit_post::RedditTimeRange;
use crate::domain::repositories::conversation_repository::ConversationRepository;
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::search::reddit::RedditClient;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Project not found")]
    ProjectNotFound,
    #[error("Conversation not found")]
    ConversationNotFound,
    /// 会话存在但所属项目不属于调用方
    #[error("Forbidden")]
    Forbidden,
}

/// 会话发现服务
///
/// Reddit 站内搜索结果入库、用户手动保存线索，以及按项目查询会话
pub struct ConversationDiscoveryService<PR, CR> {
    project_repo: Arc<PR>,
    conversation_repo: Arc<CR>,
    reddit: Arc<RedditClient>,
}

impl<PR, CR> ConversationDiscoveryService<PR, CR>
where
    PR: ProjectRepository + 'static,
    CR: ConversationRepository + 'static,
{
    pub fn new(project_repo: Arc<PR>, conversation_repo: Arc<CR>, reddit: Arc<RedditClient>) -> Self {
        Self {
            project_repo,
            conversation_repo,
            reddit,
        }
    }

    async fn owned_project(&self, user_id: Uuid, project_id: Uuid) -> Result<Project, DiscoveryError> {
        self.project_repo
            .find_for_user(project_id, user_id)
            .await?
            .ok_or(DiscoveryError::ProjectNotFound)
    }

    pub async fn discover_for_project(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        time_range: RedditTimeRange,
    ) -> Result<DiscoverySummary, DiscoveryError> {
        let project = self.owned_project(user_id, project_id).await?;
        self.discover(&project, time_range).await
    }

    /// 在项目的子版块里搜索项目关键词并保存结果
    pub async fn discover(
        &self,
        project: &Project,
        time_range: RedditTimeRange,
    ) -> Result<DiscoverySummary, DiscoveryError> {
        let results = self
            .reddit
            .search(&project.keywords, &project.subreddits, time_range)
            .await;

        let conversations_added = self
            .conversation_repo
            .upsert_discovered(project.user_id, project.id, &results)
            .await?;

        info!(
            "Discovered {} Reddit posts for project {}, {} written",
            results.len(),
            project.id,
            conversations_added
        );

        Ok(DiscoverySummary {
            conversations_added,
            total_found: results.len(),
        })
    }

    /// 保存线索；同一调用方同一项目下相同URL只保存一次
    pub async fn save_lead(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        lead: LeadToSave,
    ) -> Result<SaveLeadOutcome, DiscoveryError> {
        let project = self.owned_project(user_id, project_id).await?;

        if self
            .conversation_repo
            .find_by_url(user_id, project.id, &lead.url)
            .await?
            .is_some()
        {
            return Ok(SaveLeadOutcome::AlreadySaved);
        }

        let conversation = Conversation::from_saved_lead(user_id, project.id, lead, Utc::now());
        self.conversation_repo.insert(&conversation).await?;
        info!("Saved lead {} for project {}", conversation.url, project.id);

        Ok(SaveLeadOutcome::Saved)
    }

    /// 项目下的会话，按相关度降序；`time_range` 按发帖时间过滤
    pub async fn list_conversations(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        min_relevance: Option<i32>,
        time_range: Option<RedditTimeRange>,
    ) -> Result<Vec<Conversation>, DiscoveryError> {
        let project = self.owned_project(user_id, project_id).await?;

        let since = time_range
            .and_then(|range| range.days())
            .map(|days| Utc::now() - chrono::Duration::days(days));
        let filter = ConversationFilter {
            min_relevance,
            since,
        };

        Ok(self
            .conversation_repo
            .list_for_project(project.id, filter)
            .await?)
    }

    pub async fn get_conversation(
        &self,
        user_id: Uuid,
        conversation_id: Uuid,
    ) -> Result<Conversation, DiscoveryError> {
        let conversation = self
            .conversation_repo
            .find_by_id(conversation_id)
            .await?
            .ok_or(DiscoveryError::ConversationNotFound)?;

        match self.owned_project(user_id, conversation.project_id).await {
            Ok(_) => Ok(conversation),
            Err(DiscoveryError::ProjectNotFound) => Err(DiscoveryError::Forbidden),
            Err(e) => Err(e),
        }
    }
}
