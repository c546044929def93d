// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::domain::models::lead::{LeadResult, NormalizedHit};

/// 标题/摘要中表示主动求助的短语
const INTENT_PHRASES: [&str; 17] = [
    "looking for",
    "any tool",
    "any app",
    "recommend",
    "alternatives",
    "does anyone know",
    "need help",
    "struggling",
    "how do i",
    "is there a way",
    "can't",
    "no users",
    "no customers",
    "first customers",
    "first users",
    "get leads",
    "made money",
];

/// 文章类内容的提示词
const ARTICLE_HINTS: [&str; 6] = [
    "how i built",
    "guide",
    "tutorial",
    "case study",
    "newsletter",
    "mrr",
];

const INTENT_IN_TITLE_BONUS: i32 = 30;
const INTENT_IN_SNIPPET_BONUS: i32 = 15;
const KEYWORD_MATCH_BONUS: i32 = 20;
const THREAD_BONUS: i32 = 15;
const ARTICLE_PENALTY: i32 = 40;

/// Reddit comment permalink, HN item, GitHub issue
static THREAD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)reddit\.com/r/[^/]+/comments/").unwrap(),
        Regex::new(r"(?i)news\.ycombinator\.com/item\?id=").unwrap(),
        Regex::new(r"(?i)github\.com/[^/]+/[^/]+/issues/").unwrap(),
    ]
});

/// 线索评分器
///
/// 对单条命中按意图、关键词、讨论帖形态和文章特征打分，分值范围 [0, 100]
pub struct LeadScorer {
    keywords: Vec<String>,
    exclude_articles: bool,
}

impl LeadScorer {
    pub fn new<S: AsRef<str>>(keywords: &[S], exclude_articles: bool) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            exclude_articles,
        }
    }

    /// Score a raw hit and project it into a lead
    pub fn score(&self, hit: &NormalizedHit) -> LeadResult {
        let title_lower = hit.title.to_lowercase();
        let snippet_lower = hit.snippet.to_lowercase();
        let body = format!("{} {}", title_lower, snippet_lower);

        let keywords_matched = self.matched_keywords(&body);
        let intent_in_title = contains_any(&title_lower, &INTENT_PHRASES);
        let intent_in_snippet = contains_any(&snippet_lower, &INTENT_PHRASES);
        let thread_like = is_thread_like(&hit.url);
        let is_article = looks_like_article(&hit.url, &title_lower, &snippet_lower);

        let mut score = 0;
        if intent_in_title {
            score += INTENT_IN_TITLE_BONUS;
        }
        if intent_in_snippet {
            score += INTENT_IN_SNIPPET_BONUS;
        }
        if keywords_matched.len() >= 2 {
            score += KEYWORD_MATCH_BONUS;
        }
        if thread_like {
            score += THREAD_BONUS;
        }
        if self.exclude_articles && is_article {
            score -= ARTICLE_PENALTY;
        }

        LeadResult {
            id: lead_id(hit.engine.as_str(), &hit.url),
            title: hit.title.clone(),
            snippet: hit.snippet.clone(),
            url: hit.url.clone(),
            source: detect_source(&hit.url).to_string(),
            score: score.clamp(0, 100) as u8,
            engine: hit.engine,
            published_at: hit.published_at.clone(),
            keywords_matched,
            thread_like,
            is_article,
        }
    }

    fn matched_keywords(&self, body: &str) -> Vec<String> {
        let mut matched: Vec<String> = Vec::new();
        for keyword in &self.keywords {
            if !keyword.is_empty() && body.contains(keyword.as_str()) && !matched.contains(keyword)
            {
                matched.push(keyword.clone());
            }
        }
        matched
    }
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

pub fn is_thread_like(url: &str) -> bool {
    THREAD_PATTERNS.iter().any(|pattern| pattern.is_match(url))
}

fn looks_like_article(url: &str, title_lower: &str, snippet_lower: &str) -> bool {
    url.to_lowercase().contains("/blog/")
        || ARTICLE_HINTS
            .iter()
            .any(|hint| title_lower.contains(hint) || snippet_lower.contains(hint))
}

/// Human label for the hit's domain
pub fn detect_source(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    if lower.contains("reddit.com") {
        "Reddit"
    } else if lower.contains("news.ycombinator.com") {
        "Hacker News"
    } else if lower.contains("indiehackers.com") {
        "Indie Hackers"
    } else if lower.contains("github.com") {
        "GitHub"
    } else {
        "Web"
    }
}

/// 160-bit hex id over `engine:url` (raw url, before canonicalization)
pub fn lead_id(engine: &str, url: &str) -> String {
    let digest = Sha256::digest(format!("{}:{}", engine, url).as_bytes());
    hex::encode(&digest[..20])
}
