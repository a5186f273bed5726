use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("provider credential not configured")]
    MissingKey,

    #[error("provider answered HTTP {status}")]
    Http { status: StatusCode },

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned no data")]
    Empty,
}
