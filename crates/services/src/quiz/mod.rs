mod controller;
mod presenter;
mod session;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use controller::QuizController;
pub use presenter::{AnswerPresenter, PresentedQuestion};
pub use session::{QuizPhase, QuizSession, QuizSummary, Verdict};
pub use view::{FAILURE_NOTICE_PREFIX, QuizEvent, QuizView, failure_notice};
