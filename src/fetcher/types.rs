use url::Url;

/// A publisher page fetched for full-text extraction.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub body_utf8: String,
}
