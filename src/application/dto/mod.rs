// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据
pub mod conversation_request;
pub mod discover_request;
pub mod lead_search_request;
pub mod project_request;
pub mod save_lead_request;
