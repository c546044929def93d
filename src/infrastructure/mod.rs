// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与外部系统交互，依赖领域层的抽象接口：
/// - 缓存（cache）：线索缓存的键生成、TTL 与存储后端
/// - 数据库（database）：连接池与 SeaORM 实体
/// - 指标（metrics）：Prometheus 导出
/// - 仓库实现（repositories）：领域仓库接口的数据库实现
/// - 搜索（search）：SerpAPI 引擎、聚合器与 Reddit 客户端
pub mod cache;
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod search;
