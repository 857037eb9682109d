//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::model::QuestionError;

/// Errors emitted while retrieving a question batch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("question source reported error code {code}")]
    Api { code: u8 },
    #[error("response has no results")]
    MissingResults,
    #[error("malformed response: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid question in batch: {0}")]
    InvalidQuestion(#[from] QuestionError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the quiz session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question is being presented")]
    NotPresenting,
}

/// Errors emitted while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question source url must not be empty")]
    EmptyApiUrl,
    #[error("question source url must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
    #[error("{0} is set but is not valid unicode")]
    NonUnicodeEnv(&'static str),
}
