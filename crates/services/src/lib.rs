#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod question_source;
pub mod quiz;

pub use config::{QUESTIONS_PER_SESSION, QuizConfig};
pub use error::{ConfigError, FetchError, SessionError};
pub use question_source::{OpenTdbClient, QuestionSource, parse_batch};

pub use quiz::{
    AnswerPresenter, PresentedQuestion, QuizController, QuizEvent, QuizPhase, QuizSession,
    QuizSummary, QuizView, Verdict,
};
