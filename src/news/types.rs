use serde::{Deserialize, Serialize};

/// Top-level NewsAPI response. Only `articles` is read; error payloads
/// arrive with a non-2xx status and are never decoded.
#[derive(Debug, Default, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<NewsApiSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsApiSource {
    pub name: Option<String>,
}

/// Provider-independent article handed to the translator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedArticle {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<String>,
}
