// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 去掉片段和查询参数，得到用于去重的规范化URL
///
/// Works on the raw string so that unparsable urls still get a stable identity.
pub fn canonicalize_url(raw: &str) -> &str {
    let without_fragment = raw.split('#').next().unwrap_or(raw);
    without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment)
}

/// Append `path` segments to a base url, tolerating a trailing slash on the base
pub fn join_path(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty();
        path.extend(segments);
    }
    url
}
