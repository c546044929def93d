// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// SerpAPI 上的 Google/Bing 引擎、多引擎聚合器，以及 Reddit 站内搜索客户端
pub mod aggregator;
pub mod reddit;
pub mod serpapi;

pub use aggregator::SearchAggregator;
pub use reddit::RedditClient;
pub use serpapi::SerpApiEngine;
