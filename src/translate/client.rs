use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::{
    config::Config,
    fetcher::api_client,
    translate::{Translator, errors::TranslateError},
};

const TARGET_LANGUAGE: &str = "so";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// Google Cloud Translation (v2 REST, API key auth).
#[derive(Clone)]
pub struct GoogleTranslator {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleTranslator {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: api_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.translate_base_url(),
            config.translate_key().map(str::to_string),
        )
    }

    async fn translate(&self, text: &str) -> Result<Option<String>, TranslateError> {
        let api_key = self.api_key.as_deref().ok_or(TranslateError::MissingKey)?;

        let response = self
            .http
            .post(format!("{}/language/translate/v2", self.base_url))
            .query(&[("key", api_key)])
            .json(&TranslateRequest {
                q: text,
                target: TARGET_LANGUAGE,
                format: "text",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Http { status });
        }

        let body: TranslateResponse = response.json().await?;
        Ok(body
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .filter(|t| !t.trim().is_empty()))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    #[instrument(skip_all, fields(chars = text.len()))]
    async fn translate_to_somali(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        match self.translate(trimmed).await {
            Ok(Some(translated)) => translated,
            Ok(None) => text.to_string(),
            Err(TranslateError::MissingKey) => {
                info!("translation not configured, passing text through");
                text.to_string()
            }
            Err(e) => {
                error!("translation failed: {}", e);
                text.to_string()
            }
        }
    }
}
