use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("GOOGLE_TRANSLATE_KEY is not configured")]
    MissingKey,

    #[error("translation provider answered {status}")]
    Http { status: reqwest::StatusCode },

    #[error("translation request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
