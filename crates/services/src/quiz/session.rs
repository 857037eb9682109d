use std::fmt;

use trivia_core::decode_entities;
use trivia_core::model::Question;

use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of scoring one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Carries the decoded correct answer for display.
    Incorrect { correct_answer: String },
}

impl Verdict {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Final score of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} corrects.", self.correct, self.total)
    }
}

/// Where the controller currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No active session: not started yet, loading, or the last start failed.
    Idle,
    Presenting { position: usize },
    Finished(QuizSummary),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a fixed batch of questions.
///
/// Invariants: `position <= total` and `correct <= position`.
#[derive(Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    correct: usize,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            position: 0,
            correct: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= self.questions.len()
    }

    #[must_use]
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            correct: self.correct,
            total: self.questions.len(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.is_finished() {
            QuizPhase::Finished(self.summary())
        } else {
            QuizPhase::Presenting {
                position: self.position,
            }
        }
    }

    /// Score `selected` against the current question and move to the next one.
    ///
    /// `selected` is the text exactly as it was shown, so it is compared to the
    /// decoded correct answer without any further normalisation.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPresenting` once every question has been answered.
    pub fn record_answer(&mut self, selected: &str) -> Result<Verdict, SessionError> {
        let question = self.current_question().ok_or(SessionError::NotPresenting)?;
        let correct_answer = decode_entities(question.correct_answer());

        let verdict = if selected == correct_answer {
            self.correct += 1;
            Verdict::Correct
        } else {
            Verdict::Incorrect { correct_answer }
        };

        self.position += 1;
        Ok(verdict)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("position", &self.position)
            .field("correct", &self.correct)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
