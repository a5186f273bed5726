pub mod client;
pub mod errors;
pub mod normalize;
pub mod types;

pub use client::NewsApiClient;
pub use errors::NewsApiError;
pub use types::NormalizedArticle;

use async_trait::async_trait;

/// Source of the two refreshed topic buckets.
///
/// Implementations never fail: a provider problem is logged and reported as
/// an empty bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Top general headlines.
    async fn fetch_world_news(&self) -> Vec<NormalizedArticle>;

    /// Newest football/soccer stories.
    async fn fetch_football_news(&self) -> Vec<NormalizedArticle>;
}
