// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_config::LeadSite;

/// 查询中使用的意图短语，偏向“正在寻找解决方案”的讨论
pub const INTENT_QUERY_PHRASES: [&str; 6] = [
    "looking for",
    "need help",
    "alternatives",
    "recommend",
    "struggling",
    "how do I",
];

/// Builds `("kw1" OR "kw2") ("looking for" OR ...) (site:a OR site:b)`.
///
/// Empty clauses are left out.
pub fn build_lead_query<S: AsRef<str>>(keywords: &[S], sites: &[LeadSite]) -> String {
    let keyword_terms: Vec<String> = keywords
        .iter()
        .map(|keyword| format!("\"{}\"", keyword.as_ref().replace('"', "")))
        .collect();
    let intent_terms: Vec<String> = INTENT_QUERY_PHRASES
        .iter()
        .map(|phrase| format!("\"{}\"", phrase))
        .collect();
    let site_terms: Vec<String> = sites
        .iter()
        .map(|site| format!("site:{}", site.domain()))
        .collect();

    [keyword_terms, intent_terms, site_terms]
        .iter()
        .filter(|terms| !terms.is_empty())
        .map(|terms| format!("({})", terms.join(" OR ")))
        .collect::<Vec<_>>()
        .join(" ")
}
