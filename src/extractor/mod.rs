pub mod reader;

#[cfg(test)]
mod tests;

use crate::fetcher::types::PageResponse;

/// Shorter extractions are usually cookie walls or teaser blocks, so the
/// provider preview is kept instead.
pub const MIN_FULL_TEXT_LENGTH: usize = 300;

/// Pull the article body out of a scraped publisher page.
pub fn extract_full_text(resp: &PageResponse) -> Option<String> {
    let text = reader::extract_paragraph_text(&resp.body_utf8);

    if text.chars().count() < MIN_FULL_TEXT_LENGTH {
        return None;
    }

    Some(text)
}
