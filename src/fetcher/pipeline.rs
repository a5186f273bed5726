use crate::fetcher::{errors::FetchError, types::PageResponse};
use bytes::Bytes;
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

// Only the head of the document is searched for a <meta> declaration.
const SNIFF_LEN: usize = 4096;

pub fn process_response(
    url_final: Url,
    body_bytes: Bytes,
    content_type: &str,
) -> Result<PageResponse, FetchError> {
    let encoding = detect_encoding(content_type, &body_bytes);
    let body_utf8 = decode_to_utf8(&body_bytes, encoding)?;

    Ok(PageResponse {
        url_final,
        body_utf8,
    })
}

fn label_to_encoding(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_to_encoding(&CHARSET_REGEX, content_type) {
        return encoding;
    }

    let head = &body_bytes[..body_bytes.len().min(SNIFF_LEN)];
    if let Some(encoding) = label_to_encoding(&META_CHARSET_REGEX, &String::from_utf8_lossy(head))
    {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn decode_to_utf8(body_bytes: &[u8], encoding: &'static Encoding) -> Result<String, FetchError> {
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    // A few malformed bytes in a publisher page are tolerated; a page that is
    // mostly replacement characters is not worth extracting from.
    if had_errors {
        let replaced = decoded.matches('\u{FFFD}').count();
        debug!(replaced, encoding = encoding.name(), "page decoded with errors");
        if replaced * 10 > decoded.chars().count() {
            return Err(FetchError::Charset(format!(
                "too many invalid sequences for {}",
                encoding.name()
            )));
        }
    }

    Ok(decoded.into_owned())
}
