// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 项目（project）：关键词与子版块的来源
/// - 搜索配置（search_config）：站点、时间窗口、结果数量与关键词集合
/// - 线索（lead）：归一化命中与评分后的线索
/// - 缓存条目（cache_entry）：按配置哈希缓存的搜索结果
/// - Reddit 帖子（reddit_post）：站内搜索结果
/// - 会话（conversation）：入库的发现结果与保存的线索
pub mod cache_entry;
pub mod conversation;
pub mod lead;
pub mod project;
pub mod reddit_post;
pub mod search_config;
