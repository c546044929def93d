// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

use crate::domain::models::lead::{LeadResult, NormalizedHit};
use crate::domain::models::search_config::ResultLimit;
use crate::domain::services::lead_scorer::LeadScorer;
use crate::utils::url_utils::canonicalize_url;

/// 去重、评分并排序
///
/// 1. 按规范化URL去重，先出现的命中保留，后续重复直接丢弃（不合并分数）
/// 2. 对保留的命中逐条评分
/// 3. 按分数降序稳定排序，同分保持输入顺序
/// 4. 截断到 `limit`
pub fn rank_leads<S: AsRef<str>>(
    hits: &[NormalizedHit],
    keywords: &[S],
    exclude_articles: bool,
    limit: ResultLimit,
) -> Vec<LeadResult> {
    let scorer = LeadScorer::new(keywords, exclude_articles);

    let mut ranked: Vec<LeadResult> = dedupe_hits(hits)
        .into_iter()
        .map(|hit| scorer.score(hit))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit.get());
    ranked
}

/// First occurrence of each canonical url, in input order
pub fn dedupe_hits(hits: &[NormalizedHit]) -> Vec<&NormalizedHit> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(hits.len());
    let mut unique = Vec::with_capacity(hits.len());
    for hit in hits {
        if seen.insert(canonicalize_url(&hit.url)) {
            unique.push(hit);
        }
    }
    unique
}
