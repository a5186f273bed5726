use regex::Regex;
use std::sync::LazyLock;

use crate::news::types::{NewsApiArticle, NormalizedArticle};

static TRUNCATION_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\[\+\d+\s+chars\]$").unwrap());

/// Provider `content` with its "[+N chars]" paywall suffix removed.
pub fn clean_preview(content: Option<&str>) -> String {
    let Some(content) = content else {
        return String::new();
    };
    TRUNCATION_SUFFIX_REGEX
        .replace(content.trim(), "")
        .trim()
        .to_string()
}

/// Map a provider item to a [`NormalizedArticle`]; items without a title are
/// dropped.
pub fn normalize(item: &NewsApiArticle) -> Option<NormalizedArticle> {
    let title = item.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return None;
    }

    let mut content = clean_preview(item.content.as_deref());
    if content.is_empty() {
        content = item
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
    }

    Some(NormalizedArticle {
        title: title.to_string(),
        content,
        image_url: non_empty(item.url_to_image.as_deref()),
        published_at: non_empty(item.published_at.as_deref()),
        source: item
            .source
            .as_ref()
            .and_then(|s| non_empty(s.name.as_deref())),
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
