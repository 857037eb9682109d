use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use trivia_core::model::Question;

use crate::config::QuizConfig;
use crate::error::FetchError;

/// Supplies one batch of questions per quiz session.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch a fresh batch of questions.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the batch cannot be retrieved or decoded.
    async fn fetch_batch(&self) -> Result<Vec<Question>, FetchError>;
}

/// Open Trivia DB client.
#[derive(Clone)]
pub struct OpenTdbClient {
    client: Client,
    config: QuizConfig,
}

impl OpenTdbClient {
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch_batch(&self) -> Result<Vec<Question>, FetchError> {
        let url = self.config.batch_url();
        debug!(%url, "requesting question batch");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        parse_batch(&body)
    }
}

/// Decode an Open Trivia DB response body into questions.
///
/// # Errors
///
/// Returns `FetchError::Payload` for non-JSON bodies, `FetchError::Api` for a
/// non-zero `response_code`, `FetchError::MissingResults` when `results` is
/// absent, and `FetchError::InvalidQuestion` for malformed entries.
pub fn parse_batch(body: &str) -> Result<Vec<Question>, FetchError> {
    let batch: BatchResponse = serde_json::from_str(body)?;

    if let Some(code) = batch.response_code.filter(|code| *code != 0) {
        return Err(FetchError::Api { code });
    }

    let results = batch.results.ok_or(FetchError::MissingResults)?;
    results
        .into_iter()
        .map(|raw| -> Result<Question, FetchError> {
            let question = Question::new(raw.question, raw.correct_answer, raw.incorrect_answers)?;
            Ok(match raw.category {
                Some(category) => question.with_category(category),
                None => question,
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct BatchResponse {
    response_code: Option<u8>,
    results: Option<Vec<RawQuestion>>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "easy",
                "category": "Entertainment: Video Games",
                "question": "Who is the main character of &quot;Pok&eacute;mon&quot;?",
                "correct_answer": "Ash",
                "incorrect_answers": ["Gary", "Brock", "Misty"]
            },
            {
                "type": "multiple",
                "difficulty": "hard",
                "category": "Science &amp; Nature",
                "question": "What is H&#039;s atomic number?",
                "correct_answer": "1",
                "incorrect_answers": ["2", "3", "4"]
            }
        ]
    }"#;

    #[test]
    fn parses_results_keeping_raw_text() {
        let questions = parse_batch(SAMPLE).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(
            questions[0].prompt(),
            "Who is the main character of &quot;Pok&eacute;mon&quot;?"
        );
        assert_eq!(questions[0].correct_answer(), "Ash");
        assert_eq!(questions[0].category(), Some("Entertainment: Video Games"));
        assert_eq!(questions[1].incorrect_answers(), ["2", "3", "4"]);
    }

    #[test]
    fn non_json_body_is_a_payload_error() {
        let err = parse_batch("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Payload(_)));
    }

    #[test]
    fn missing_results_is_rejected() {
        let err = parse_batch(r#"{"response_code": 0}"#).unwrap_err();
        assert!(matches!(err, FetchError::MissingResults));
    }

    #[test]
    fn non_zero_response_code_is_rejected() {
        let err = parse_batch(r#"{"response_code": 5, "results": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Api { code: 5 }));
    }

    #[test]
    fn question_with_wrong_distractor_count_is_rejected() {
        let body = r#"{"results": [{"question": "Q", "correct_answer": "A", "incorrect_answers": ["B"]}]}"#;
        let err = parse_batch(body).unwrap_err();
        assert!(matches!(err, FetchError::InvalidQuestion(_)));
    }

    #[test]
    fn empty_results_is_an_empty_batch() {
        assert!(parse_batch(r#"{"response_code": 0, "results": []}"#).unwrap().is_empty());
    }
}
