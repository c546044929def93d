// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeadSearchCache::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeadSearchCache::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeadSearchCache::UserId).uuid().not_null())
                    .col(ColumnDef::new(LeadSearchCache::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(LeadSearchCache::QueryHash).string().not_null())
                    .col(ColumnDef::new(LeadSearchCache::Payload).json().not_null())
                    .col(
                        ColumnDef::new(LeadSearchCache::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeadSearchCache::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lead_search_cache_key")
                    .table(LeadSearchCache::Table)
                    .col(LeadSearchCache::UserId)
                    .col(LeadSearchCache::ProjectId)
                    .col(LeadSearchCache::QueryHash)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeadSearchCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeadSearchCache {
    Table,
    Id,
    UserId,
    ProjectId,
    QueryHash,
    Payload,
    ExpiresAt,
    UpdatedAt,
}
