// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use uuid::Uuid;

use crate::domain::models::cache_entry::{CachedLeadPayload, LeadCacheEntry};
use crate::domain::repositories::lead_cache_repository::LeadCacheRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::lead_search_cache;

/// 数据库线索缓存仓库实现
#[derive(Clone)]
pub struct LeadCacheRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl LeadCacheRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeadCacheRepository for LeadCacheRepoImpl {
    async fn find_fresh(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        cache_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<LeadCacheEntry>, RepositoryError> {
        let model = lead_search_cache::Entity::find()
            .filter(lead_search_cache::Column::UserId.eq(user_id))
            .filter(lead_search_cache::Column::ProjectId.eq(project_id))
            .filter(lead_search_cache::Column::QueryHash.eq(cache_key))
            .one(self.db.as_ref())
            .await?;

        // expiry is compared in process; sqlite stores timestamps as text
        match model {
            Some(model) => {
                let entry = LeadCacheEntry::try_from(model)?;
                Ok(entry.is_fresh_at(now).then_some(entry))
            }
            None => Ok(None),
        }
    }

    async fn upsert(&self, entry: &LeadCacheEntry) -> Result<(), RepositoryError> {
        let model = lead_search_cache::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(entry.user_id),
            project_id: Set(entry.project_id),
            query_hash: Set(entry.cache_key.clone()),
            payload: Set(serde_json::to_value(&entry.payload)?),
            expires_at: Set(entry.expires_at.into()),
            updated_at: Set(Utc::now().into()),
        };

        lead_search_cache::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    lead_search_cache::Column::UserId,
                    lead_search_cache::Column::ProjectId,
                    lead_search_cache::Column::QueryHash,
                ])
                .update_columns([
                    lead_search_cache::Column::Payload,
                    lead_search_cache::Column::ExpiresAt,
                    lead_search_cache::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(())
    }
}

impl TryFrom<lead_search_cache::Model> for LeadCacheEntry {
    type Error = RepositoryError;

    fn try_from(model: lead_search_cache::Model) -> Result<Self, Self::Error> {
        let payload: CachedLeadPayload = serde_json::from_value(model.payload)?;
        Ok(Self {
            user_id: model.user_id,
            project_id: model.project_id,
            cache_key: model.query_hash,
            payload,
            expires_at: model.expires_at.with_timezone(&Utc),
        })
    }
}
