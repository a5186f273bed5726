//! Heuristic check deciding whether article text is substantive enough to
//! publish.
//!
//! News providers hand out truncated previews ("... [+1234 chars]") on their
//! free tiers. Those rows are stored as-is by the refresh run and filtered
//! here when pages pick what to display.

use regex::Regex;
use std::sync::LazyLock;

const MIN_CONTENT_LENGTH: usize = 180;
const MIN_WORD_COUNT: usize = 30;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static TRUNCATION_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[\+\d+\s+chars\]$").unwrap());

/// Strip HTML tags, collapse runs of whitespace and trim.
pub fn normalize_text(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns `true` when `text` looks like a complete article body.
pub fn is_complete(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return false;
    };

    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return false;
    }

    if TRUNCATION_MARKER_REGEX.is_match(&normalized) {
        return false;
    }

    if normalized.ends_with("...") || normalized.ends_with('\u{2026}') {
        return false;
    }

    let length = normalized.chars().count();
    let word_count = normalized.split(' ').filter(|w| !w.is_empty()).count();

    length >= MIN_CONTENT_LENGTH && word_count >= MIN_WORD_COUNT
}
