// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_projects;
mod m20261001_000002_create_conversations;
mod m20261001_000003_create_lead_search_cache;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_projects::Migration),
            Box::new(m20261001_000002_create_conversations::Migration),
            Box::new(m20261001_000003_create_lead_search_cache::Migration),
        ]
    }
}
