use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::question_source::QuestionSource;

use super::presenter::AnswerPresenter;
use super::session::{QuizPhase, QuizSession, Verdict};
use super::view::{QuizEvent, QuizView, failure_notice};

/// Drives a quiz: fetch a batch, present each question, score, summarise.
///
/// The controller owns the only session. Starting again always replaces it,
/// and a failed start leaves no session behind.
pub struct QuizController<V: QuizView> {
    source: Arc<dyn QuestionSource>,
    presenter: AnswerPresenter,
    view: V,
    session: Option<QuizSession>,
}

impl<V: QuizView> QuizController<V> {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, view: V) -> Self {
        Self {
            source,
            presenter: AnswerPresenter::new(),
            view,
            session: None,
        }
    }

    #[must_use]
    pub fn with_presenter(mut self, presenter: AnswerPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.as_ref().map_or(QuizPhase::Idle, QuizSession::phase)
    }

    /// Fetch a fresh batch and present its first question.
    ///
    /// Fetch failures are reported through `QuizView::notify_failure` and leave
    /// the controller idle with restart available. There is no retry.
    pub async fn start_session(&mut self) -> QuizPhase {
        self.view.show_loading();
        self.view.set_restart_available(false);
        self.session = None;

        match self.source.fetch_batch().await {
            Ok(questions) => {
                info!(questions = questions.len(), "quiz session started");
                self.session = Some(QuizSession::new(questions));
                self.advance()
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch question batch");
                self.view.notify_failure(&failure_notice(&err));
                self.view.set_restart_available(true);
                QuizPhase::Idle
            }
        }
    }

    /// Present the current question, or the summary once every question is answered.
    pub fn advance(&mut self) -> QuizPhase {
        let Some(session) = self.session.as_ref() else {
            return QuizPhase::Idle;
        };

        match session.current_question() {
            Some(question) => {
                let presented = self.presenter.present(question);
                self.view.show_question(
                    session.position() + 1,
                    session.total(),
                    presented.category.as_deref(),
                    &presented.prompt,
                );
                self.view.show_choices(presented.choices.choices());
            }
            None => {
                let summary = session.summary();
                info!(correct = summary.correct, total = summary.total, "quiz session finished");
                self.view.show_summary(&summary);
                self.view.set_restart_available(true);
            }
        }

        session.phase()
    }

    /// Score `selected` against the current question, report it, and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPresenting` when there is no question on screen.
    pub fn record_answer(&mut self, selected: &str) -> Result<Verdict, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotPresenting)?;
        let position = session.position();
        let verdict = session.record_answer(selected)?;
        debug!(position, correct = verdict.is_correct(), "answer recorded");

        self.view.show_verdict(&verdict);
        self.advance();
        Ok(verdict)
    }

    /// Dispatch one input event from the presentation surface.
    pub async fn handle(&mut self, event: QuizEvent) -> QuizPhase {
        match event {
            QuizEvent::RestartRequested => self.start_session().await,
            QuizEvent::ChoiceSelected { question, text } => {
                let current = self.session.as_ref().map(QuizSession::position);
                if current != Some(question) {
                    warn!(question, ?current, "ignoring selection for a question that is not on screen");
                    return self.phase();
                }
                if let Err(err) = self.record_answer(&text) {
                    warn!(error = %err, "selection ignored");
                }
                self.phase()
            }
        }
    }
}
