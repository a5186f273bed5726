use url::Url;

use crate::extractor::{MIN_FULL_TEXT_LENGTH, extract_full_text};
use crate::fetcher::types::PageResponse;

#[test]
fn test_extract_full_article() {
    let paragraph = "Officials confirmed on Tuesday that the new port terminal will open next spring after delays. ";
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Port</title><style>p {{ color: red }}</style></head>
        <body><header><p>Subscribe now</p></header>
        <article><h1>Port terminal</h1><p>{}</p><p>{}</p><p>{}</p><p>{}</p></article>
        <footer><p>Copyright</p></footer></body></html>"#,
        paragraph, paragraph, paragraph, paragraph
    );

    let response = create_test_response(html, "https://example.com/port");
    let text = extract_full_text(&response).expect("article should be long enough");

    assert!(text.chars().count() >= MIN_FULL_TEXT_LENGTH);
    assert!(text.starts_with("Officials confirmed"));
    assert!(!text.contains("Subscribe now"));
    assert!(!text.contains("Copyright"));
    assert_eq!(text.matches("\n\n").count(), 3);
}

#[test]
fn test_short_extraction_is_rejected() {
    let html = "<html><body><article><p>Too short to replace the preview.</p></article></body></html>";
    let response = create_test_response(html.to_string(), "https://example.com/short");
    assert!(extract_full_text(&response).is_none());
}

#[test]
fn test_malformed_html() {
    let html = format!(
        "<html><head><title>Broken</title><body><p>{}<div>More content",
        "Unclosed tags everywhere. ".repeat(20)
    );
    let response = create_test_response(html, "https://example.com/broken");

    // Should handle malformed HTML gracefully
    if let Some(text) = extract_full_text(&response) {
        assert!(text.contains("Unclosed tags"));
    }
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        body_utf8: html,
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let response = create_test_response(html, "https://example.com");
            let _ = extract_full_text(&response);
        }
    }
}
