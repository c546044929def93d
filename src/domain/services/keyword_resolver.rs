// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::project::Project;
use crate::domain::models::search_config::{KeywordSet, MAX_KEYWORDS, MIN_KEYWORDS};

/// 兜底填充词，按顺序追加
const FILLER_TERMS: [&str; 7] = [
    "customers", "leads", "ai", "vibe", "support", "build", "growth",
];

/// 填充词耗尽后用于合成编号变体的种子
const FALLBACK_SEEDS: [&str; 5] = ["growth", "building", "service", "beta", "feedback"];

/// 关键词解析器
///
/// 从项目的显式关键词、名称和描述中推导出 [3, 8] 个搜索关键词。
/// 纯函数，不会失败。
pub struct KeywordResolver;

impl KeywordResolver {
    pub fn resolve(project: &Project) -> KeywordSet {
        Self::resolve_parts(&project.name, &project.product_description, &project.keywords)
    }

    pub fn resolve_parts(name: &str, description: &str, explicit: &[String]) -> KeywordSet {
        // Tier 1: explicit project keywords
        let mut keywords: Vec<String> = Vec::new();
        for keyword in explicit {
            let normalized = normalize_keyword(keyword);
            if normalized.chars().count() > 1 {
                push_unique(&mut keywords, normalized);
            }
        }

        if keywords.len() >= MIN_KEYWORDS {
            keywords.truncate(MAX_KEYWORDS);
            return KeywordSet::from_resolved(keywords);
        }

        // Tier 2: tokens from name + description
        let text = format!("{} {}", name, description);
        for token in tokenize(&text) {
            push_unique(&mut keywords, token);
        }
        keywords.truncate(MAX_KEYWORDS);

        // Tier 3: generic filler, then synthesized seeds
        for term in FILLER_TERMS {
            if keywords.len() >= MIN_KEYWORDS {
                break;
            }
            push_unique(&mut keywords, term.to_string());
        }

        let mut index = 0usize;
        while keywords.len() < MIN_KEYWORDS {
            let seed = FALLBACK_SEEDS[index % FALLBACK_SEEDS.len()];
            push_unique(&mut keywords, format!("{}-{}", seed, index));
            index += 1;
        }

        KeywordSet::from_resolved(keywords)
    }
}

fn normalize_keyword(value: &str) -> String {
    value
        .to_lowercase()
        .replace(['"', '\''], "")
        .trim()
        .to_string()
}

/// Split on runs of non-alphanumeric characters, keeping tokens of length >= 2
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| token.len() >= 2)
        .map(str::to_string)
        .collect()
}

fn push_unique(keywords: &mut Vec<String>, candidate: String) {
    if !keywords.contains(&candidate) {
        keywords.push(candidate);
    }
}
