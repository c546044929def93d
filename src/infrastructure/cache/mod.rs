// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 线索搜索缓存的键生成、TTL 控制以及三种存储后端：
/// 数据库（见 repositories）、Redis 和进程内存
pub mod cache_manager;
pub mod memory_lead_cache;
pub mod redis_client;
pub mod redis_lead_cache;
