pub mod client;
pub mod errors;

pub use client::GoogleTranslator;
pub use errors::TranslateError;

use async_trait::async_trait;

/// Produces the Somali copy of article text.
///
/// Never fails: blank input yields `""` without a provider call, and an
/// unconfigured or failing provider yields the input unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_to_somali(&self, text: &str) -> String;
}
