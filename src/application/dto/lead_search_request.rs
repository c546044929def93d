// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::lead::LeadResult;
use crate::domain::models::search_config::{LeadSearchOptions, LeadSite, ResultLimit, TimeWindow};

/// 线索搜索请求，未提供的字段使用默认值
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadSearchRequestDto {
    pub project_id: Uuid,
    #[validate(length(min = 1, message = "sites cannot be empty"))]
    pub sites: Option<Vec<LeadSite>>,
    pub time_window: Option<TimeWindow>,
    pub limit: Option<ResultLimit>,
    pub exclude_articles: Option<bool>,
    pub force_refresh: Option<bool>,
}

impl LeadSearchRequestDto {
    pub fn to_options(&self) -> LeadSearchOptions {
        let defaults = LeadSearchOptions::default();
        LeadSearchOptions {
            sites: self.sites.clone().unwrap_or(defaults.sites),
            time_window: self.time_window.unwrap_or(defaults.time_window),
            limit: self.limit.unwrap_or(defaults.limit),
            exclude_articles: self.exclude_articles.unwrap_or(defaults.exclude_articles),
            force_refresh: self.force_refresh.unwrap_or(defaults.force_refresh),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeadSearchResponseDto {
    pub results: Vec<LeadResult>,
    pub cached: bool,
}
