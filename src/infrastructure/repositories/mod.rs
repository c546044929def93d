// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于 SeaORM 的领域仓库实现
pub mod conversation_repo_impl;
pub mod lead_cache_repo_impl;
pub mod project_repo_impl;
