// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use uuid::Uuid;

use crate::domain::models::conversation::{Conversation, ConversationFilter, PLATFORM_REDDIT};
use crate::domain::models::reddit_post::RedditSearchResult;
use crate::domain::repositories::conversation_repository::ConversationRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::conversation;

/// 会话仓库实现
#[derive(Clone)]
pub struct ConversationRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ConversationRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConversationRepository for ConversationRepoImpl {
    async fn upsert_discovered(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        results: &[RedditSearchResult],
    ) -> Result<u64, RepositoryError> {
        if results.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models = results.iter().map(|result| conversation::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            project_id: Set(project_id),
            platform: Set(PLATFORM_REDDIT.to_string()),
            external_id: Set(Some(result.external_id.clone())),
            url: Set(result.url.clone()),
            title: Set(result.title.clone()),
            author: Set(Some(result.author.clone())),
            subreddit: Set(Some(result.subreddit.clone())),
            excerpt: Set(result.excerpt.clone()),
            score: Set(result.score),
            num_comments: Set(result.num_comments),
            relevance_score: Set(i32::from(result.relevance_score)),
            source: Set(Some("Reddit".to_string())),
            platform_created_at: Set(result.created_at.into()),
            found_at: Set(now.into()),
        });

        let written = conversation::Entity::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    conversation::Column::ProjectId,
                    conversation::Column::ExternalId,
                ])
                .update_columns([
                    conversation::Column::Url,
                    conversation::Column::Title,
                    conversation::Column::Author,
                    conversation::Column::Subreddit,
                    conversation::Column::Excerpt,
                    conversation::Column::Score,
                    conversation::Column::NumComments,
                    conversation::Column::RelevanceScore,
                    conversation::Column::PlatformCreatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(written)
    }

    async fn find_by_url(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        url: &str,
    ) -> Result<Option<Conversation>, RepositoryError> {
        let model = conversation::Entity::find()
            .filter(conversation::Column::UserId.eq(user_id))
            .filter(conversation::Column::ProjectId.eq(project_id))
            .filter(conversation::Column::Url.eq(url))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn insert(&self, conversation: &Conversation) -> Result<Conversation, RepositoryError> {
        let model = conversation::ActiveModel {
            id: Set(conversation.id),
            user_id: Set(conversation.user_id),
            project_id: Set(conversation.project_id),
            platform: Set(conversation.platform.clone()),
            external_id: Set(conversation.external_id.clone()),
            url: Set(conversation.url.clone()),
            title: Set(conversation.title.clone()),
            author: Set(conversation.author.clone()),
            subreddit: Set(conversation.subreddit.clone()),
            excerpt: Set(conversation.excerpt.clone()),
            score: Set(conversation.score),
            num_comments: Set(conversation.num_comments),
            relevance_score: Set(conversation.relevance_score),
            source: Set(conversation.source.clone()),
            platform_created_at: Set(conversation.platform_created_at.into()),
            found_at: Set(conversation.found_at.into()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(conversation.clone())
    }

    async fn list_for_project(
        &self,
        project_id: Uuid,
        filter: ConversationFilter,
    ) -> Result<Vec<Conversation>, RepositoryError> {
        let mut query =
            conversation::Entity::find().filter(conversation::Column::ProjectId.eq(project_id));

        if let Some(min_relevance) = filter.min_relevance {
            query = query.filter(conversation::Column::RelevanceScore.gte(min_relevance));
        }

        let models = query
            .order_by_desc(conversation::Column::RelevanceScore)
            .order_by_desc(conversation::Column::PlatformCreatedAt)
            .all(self.db.as_ref())
            .await?;

        // SQLite keeps timestamps as text, so the time bound is checked here
        Ok(models
            .into_iter()
            .map(Conversation::from)
            .filter(|c| filter.since.map_or(true, |since| c.platform_created_at >= since))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Conversation>, RepositoryError> {
        let model = conversation::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}

impl From<conversation::Model> for Conversation {
    fn from(model: conversation::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            project_id: model.project_id,
            platform: model.platform,
            external_id: model.external_id,
            url: model.url,
            title: model.title,
            author: model.author,
            subreddit: model.subreddit,
            excerpt: model.excerpt,
            score: model.score,
            num_comments: model.num_comments,
            relevance_score: model.relevance_score,
            source: model.source,
            platform_created_at: model.platform_created_at.with_timezone(&Utc),
            found_at: model.found_at.with_timezone(&Utc),
        }
    }
}
