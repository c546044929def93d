// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 线索发现流水线的业务逻辑：
/// - 关键词解析（keyword_resolver）：从项目推导 3 到 8 个关键词
/// - 查询构造（query_builder）：关键词、意图短语与站点限定组成布尔查询
/// - 线索评分（lead_scorer）与排序（lead_ranker）：去重、打分、截断
/// - 线索搜索（lead_search_service）：带缓存的完整搜索流程
/// - 会话发现（conversation_discovery_service）：Reddit 站内发现、线索保存与会话查询
/// - 项目管理（project_service）
pub mod conversation_discovery_service;
pub mod keyword_resolver;
pub mod lead_ranker;
pub mod lead_scorer;
pub mod lead_search_service;
pub mod project_service;
pub mod query_builder;
