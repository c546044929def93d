// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::conversation::LeadToSave;

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveLeadRequestDto {
    pub project_id: Uuid,
    #[validate(url)]
    pub url: String,
    #[validate(length(min = 5))]
    pub title: String,
    #[validate(length(min = 5))]
    pub snippet: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub score: f64,
    #[validate(length(min = 1))]
    pub source: String,
    /// RFC 3339；无法解析时按当前时间处理
    pub published_at: Option<String>,
}

impl SaveLeadRequestDto {
    pub fn into_lead(self) -> LeadToSave {
        let published_at = self
            .published_at
            .as_deref()
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
            .map(|value| value.with_timezone(&Utc));

        LeadToSave {
            url: self.url,
            title: self.title,
            snippet: self.snippet,
            score: self.score.round().clamp(0.0, 100.0) as u8,
            source: self.source,
            published_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveLeadResponseDto {
    pub message: String,
}
