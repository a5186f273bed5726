use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsApiError {
    #[error("NEWS_API_KEY is not configured")]
    MissingKey,

    #[error("news provider answered {status}")]
    Http { status: reqwest::StatusCode },

    #[error("news provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
