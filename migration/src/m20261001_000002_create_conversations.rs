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
                    .table(Conversations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conversations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conversations::UserId).uuid().not_null())
                    .col(ColumnDef::new(Conversations::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(Conversations::Platform)
                            .string()
                            .not_null()
                            .default("WEB"),
                    )
                    .col(ColumnDef::new(Conversations::ExternalId).string())
                    .col(ColumnDef::new(Conversations::Url).text().not_null())
                    .col(ColumnDef::new(Conversations::Title).text().not_null())
                    .col(ColumnDef::new(Conversations::Author).string())
                    .col(ColumnDef::new(Conversations::Subreddit).string())
                    .col(
                        ColumnDef::new(Conversations::Excerpt)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Conversations::Score)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Conversations::NumComments)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Conversations::RelevanceScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Conversations::Source).string())
                    .col(
                        ColumnDef::new(Conversations::PlatformCreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversations::FoundAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Reddit discovery upserts on (project_id, external_id); saved web leads
        // have no external id and never conflict
        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_project_external")
                    .table(Conversations::Table)
                    .col(Conversations::ProjectId)
                    .col(Conversations::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_user_project_url")
                    .table(Conversations::Table)
                    .col(Conversations::UserId)
                    .col(Conversations::ProjectId)
                    .col(Conversations::Url)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conversations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Conversations {
    Table,
    Id,
    UserId,
    ProjectId,
    Platform,
    ExternalId,
    Url,
    Title,
    Author,
    Subreddit,
    Excerpt,
    Score,
    NumComments,
    RelevanceScore,
    Source,
    PlatformCreatedAt,
    FoundAt,
}
