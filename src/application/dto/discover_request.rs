// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::reddit_post::RedditTimeRange;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverRequestDto {
    pub project_id: Uuid,
    /// 默认 `week`
    #[serde(default)]
    pub time_range: RedditTimeRange,
}
