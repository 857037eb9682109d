use std::env::{self, VarError};

use crate::error::ConfigError;

/// Default Open Trivia DB endpoint.
pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

/// Number of questions requested for every session.
pub const QUESTIONS_PER_SESSION: usize = 10;

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "TRIVIA_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    api_url: String,
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when the url is blank or not http(s).
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.into().trim().to_string();
        if api_url.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(api_url));
        }
        Ok(Self { api_url })
    }

    /// Reads `TRIVIA_API_URL`, falling back to the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(env::var(API_URL_ENV))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(url) => Self::new(url),
            Err(VarError::NotPresent) => Self::new(DEFAULT_API_URL),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NonUnicodeEnv(API_URL_ENV)),
        }
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full request url for one batch of multiple-choice questions.
    #[must_use]
    pub fn batch_url(&self) -> String {
        format!(
            "{}?amount={QUESTIONS_PER_SESSION}&type=multiple",
            self.api_url.trim_end_matches('/')
        )
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
