use super::session::{QuizSummary, Verdict};

/// Prefix of the notice shown when a session cannot be started.
pub const FAILURE_NOTICE_PREFIX: &str = "Failed to load quiz...";

/// Build the user-visible failure notice for `error`.
#[must_use]
pub fn failure_notice(error: &impl std::fmt::Display) -> String {
    format!("{FAILURE_NOTICE_PREFIX} ({error})")
}

/// Presentation surface driven by the quiz controller.
pub trait QuizView {
    /// A batch is being fetched; clear the question, result and choices.
    fn show_loading(&mut self);

    /// `number` is one-based.
    fn show_question(&mut self, number: usize, total: usize, category: Option<&str>, text: &str);

    fn show_choices(&mut self, choices: &[String]);

    fn show_verdict(&mut self, verdict: &Verdict);

    fn show_summary(&mut self, summary: &QuizSummary);

    fn set_restart_available(&mut self, available: bool);

    /// Blocking, user-visible notice that a session could not be started.
    fn notify_failure(&mut self, message: &str);
}

/// Input events the presentation surface feeds back into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// `question` is the zero-based position of the question that was answered.
    ChoiceSelected { question: usize, text: String },
    RestartRequested,
}
