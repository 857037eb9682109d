use thiserror::Error;

/// Number of distractors every multiple-choice question carries.
pub const INCORRECT_ANSWERS_PER_QUESTION: usize = 3;

//
// ─── QUESTION ERRORS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt must not be empty")]
    EmptyPrompt,

    #[error("correct answer must not be empty")]
    EmptyCorrectAnswer,

    #[error("expected {expected} incorrect answers, got {actual}")]
    IncorrectAnswerCount { expected: usize, actual: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice trivia item as delivered by the question source.
///
/// All strings are kept exactly as received, HTML entities included. Decoding
/// happens at presentation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    category: Option<String>,
}

impl Question {
    /// Build a question from its raw parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyCorrectAnswer`
    /// for blank text, and `QuestionError::IncorrectAnswerCount` unless exactly
    /// three incorrect answers are supplied.
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let correct_answer = correct_answer.into();
        if correct_answer.trim().is_empty() {
            return Err(QuestionError::EmptyCorrectAnswer);
        }

        if incorrect_answers.len() != INCORRECT_ANSWERS_PER_QUESTION {
            return Err(QuestionError::IncorrectAnswerCount {
                expected: INCORRECT_ANSWERS_PER_QUESTION,
                actual: incorrect_answers.len(),
            });
        }

        Ok(Self {
            prompt,
            correct_answer,
            incorrect_answers,
            category: None,
        })
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// All answers in source order: the correct one first, then the distractors.
    #[must_use]
    pub fn answers(&self) -> Vec<String> {
        let mut answers = Vec::with_capacity(1 + self.incorrect_answers.len());
        answers.push(self.correct_answer.clone());
        answers.extend(self.incorrect_answers.iter().cloned());
        answers
    }
}
