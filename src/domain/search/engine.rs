// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::{EngineKind, NormalizedHit};
use crate::domain::models::search_config::TimeWindow;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Search provider returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Search engine not configured: {0}")]
    NotConfigured(String),
}

impl SearchError {
    /// 上游返回 429
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SearchError::HttpStatus { status: 429, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::NetworkError(err.to_string())
        }
    }
}

#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Run a boolean query scoped to the given freshness window
    async fn search(
        &self,
        query: &str,
        time_window: TimeWindow,
    ) -> Result<Vec<NormalizedHit>, SearchError>;

    /// Which engine produced the hits
    fn kind(&self) -> EngineKind;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}
