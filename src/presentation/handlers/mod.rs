// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器负责一个API端点
pub mod conversation_handler;
pub mod discover_handler;
pub mod lead_search_handler;
pub mod project_handler;
pub mod save_lead_handler;
