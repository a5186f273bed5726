//! Public read side of the refreshed buckets.
//!
//! Pages only show rows whose body passes the quality check, preferring the
//! Somali copy. When nothing qualifies the fixed sample set is served.

pub mod dtos;
pub mod fallback;
pub mod handlers;

use crate::{articles::dtos::ArticleView, entities::Article, quality::is_complete};

/// Rows read per page.
pub const PAGE_LIMIT: i64 = 24;

/// Keep complete rows and map them to their display form.
pub fn displayable(rows: Vec<Article>, source: &str) -> Vec<ArticleView> {
    rows.into_iter()
        .filter_map(|row| {
            let body = row.content_so.clone().or_else(|| row.content.clone());
            if !is_complete(body.as_deref()) {
                return None;
            }

            Some(ArticleView {
                title: row.title_so.unwrap_or(row.title),
                description: body.unwrap_or_default(),
                url_to_image: row.image_url,
                published_at: row.published_at.unwrap_or(row.created_at),
                source: source.to_string(),
            })
        })
        .collect()
}
