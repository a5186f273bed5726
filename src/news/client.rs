use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    config::Config,
    extractor::extract_full_text,
    fetcher::{api_client, fetch},
    news::{
        NewsSource,
        errors::NewsApiError,
        normalize::normalize,
        types::{NewsApiArticle, NewsApiResponse, NormalizedArticle},
    },
};

const PAGE_SIZE: &str = "12";

/// NewsAPI (newsapi.org v2) client.
#[derive(Clone)]
pub struct NewsApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    full_text: bool,
}

impl NewsApiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, full_text: bool) -> Self {
        Self {
            http: api_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            full_text,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.news_api_base_url(),
            config.news_api_key().map(str::to_string),
            config.full_article_scrape(),
        )
    }

    async fn request(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<NewsApiArticle>, NewsApiError> {
        let api_key = self.api_key.as_deref().ok_or(NewsApiError::MissingKey)?;

        let response = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .query(params)
            .query(&[("apiKey", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsApiError::Http { status });
        }

        let body: NewsApiResponse = response.json().await?;
        Ok(body.articles)
    }

    #[instrument(skip(self, params))]
    async fn fetch_bucket(
        &self,
        bucket: &'static str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Vec<NormalizedArticle> {
        let items = match self.request(path, params).await {
            Ok(items) => items,
            Err(NewsApiError::MissingKey) => {
                info!("news provider not configured, nothing fetched");
                return Vec::new();
            }
            Err(e) => {
                error!("news request failed: {}", e);
                return Vec::new();
            }
        };

        let received = items.len();
        let articles: Vec<NormalizedArticle> = join_all(items.iter().map(|item| self.normalize(item)))
            .await
            .into_iter()
            .flatten()
            .collect();

        info!(received, kept = articles.len(), "news bucket fetched");
        articles
    }

    async fn normalize(&self, item: &NewsApiArticle) -> Option<NormalizedArticle> {
        let mut article = normalize(item)?;

        if self.full_text
            && let Some(url) = item.url.as_deref()
            && let Some(text) = scrape_full_text(url).await
        {
            article.content = text;
        }

        Some(article)
    }
}

/// Fetch the publisher page and extract its body. Any failure keeps the
/// provider preview.
async fn scrape_full_text(url: &str) -> Option<String> {
    match fetch(url).await {
        Ok(page) => {
            let text = extract_full_text(&page);
            if text.is_none() {
                debug!(url, "extracted text too short, keeping preview");
            }
            text
        }
        Err(e) if e.is_timeout() => {
            warn!(url, "full article fetch timed out");
            None
        }
        Err(e) => {
            debug!(url, "full article fetch failed: {}", e);
            None
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch_world_news(&self) -> Vec<NormalizedArticle> {
        self.fetch_bucket(
            "world",
            "top-headlines",
            &[
                ("category", "general"),
                ("language", "en"),
                ("pageSize", PAGE_SIZE),
            ],
        )
        .await
    }

    async fn fetch_football_news(&self) -> Vec<NormalizedArticle> {
        self.fetch_bucket(
            "football",
            "everything",
            &[
                ("q", "football OR soccer"),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", PAGE_SIZE),
            ],
        )
        .await
    }
}
