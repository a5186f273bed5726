use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{info, instrument};

use crate::{config::Config, fetcher::api_client};

/// Path of the refresh endpoint, relative to the public base URL.
pub const UPDATE_NEWS_PATH: &str = "/api/cron/update-news";

/// A full run translates two buckets article by article.
const TRIGGER_TIMEOUT: Duration = Duration::from_secs(300);

/// Calls this service's own refresh endpoint the way the external cron does.
#[derive(Clone)]
pub struct RefreshTrigger {
    http: Client,
    endpoint: String,
    secret: Option<String>,
}

impl RefreshTrigger {
    pub fn new(public_base_url: &str, secret: Option<String>) -> Self {
        Self {
            http: api_client().clone(),
            endpoint: format!("{}{}", public_base_url.trim_end_matches('/'), UPDATE_NEWS_PATH),
            secret,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.public_base_url(),
            config.cron_secret().map(str::to_string),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the refresh endpoint's status and JSON body. Only transport
    /// and decode failures are errors.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn trigger(&self) -> Result<(StatusCode, serde_json::Value)> {
        let mut request = self.http.get(&self.endpoint).timeout(TRIGGER_TIMEOUT);
        if let Some(secret) = &self.secret {
            request = request.bearer_auth(secret);
        }

        let response = request
            .send()
            .await
            .context("refresh endpoint unreachable")?;
        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .context("refresh endpoint returned a non-JSON body")?;

        info!(%status, "refresh triggered");
        Ok((status, body))
    }
}
