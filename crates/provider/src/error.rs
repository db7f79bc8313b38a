//! Typed error enum for the provider crate.

use thiserror::Error;

/// Errors from weather provider calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing field in response: {0}")]
    MissingField(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ProviderError {
    /// Whether the provider said the city does not exist.
    #[must_use]
    pub fn is_unknown_city(&self) -> bool {
        matches!(self, Self::HttpStatus { code: 404, .. })
    }
}
