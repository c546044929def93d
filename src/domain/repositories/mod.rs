// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 领域层只依赖这些抽象，具体实现位于基础设施层：
/// - 线索缓存仓库（lead_cache_repository）：按用户、项目和缓存键存取搜索结果
/// - 项目仓库（project_repository）：读取调用方拥有的项目
/// - 会话仓库（conversation_repository）：保存 Reddit 发现结果和用户保存的线索
pub mod conversation_repository;
pub mod lead_cache_repository;
pub mod project_repository;

use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 存储后端错误（数据库、Redis）
    #[error("Database error: {0}")]
    DatabaseError(String),
    /// 载荷序列化失败
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        RepositoryError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}
