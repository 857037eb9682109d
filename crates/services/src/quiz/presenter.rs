use rand::SeedableRng;
use rand::rngs::StdRng;

use trivia_core::decode_entities;
use trivia_core::model::{PresentedAnswerSet, Question};

/// A question ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub category: Option<String>,
    pub prompt: String,
    pub choices: PresentedAnswerSet,
}

/// Turns questions into decoded, shuffled display data.
#[derive(Debug, Clone)]
pub struct AnswerPresenter {
    rng: StdRng,
}

impl AnswerPresenter {
    /// Presenter seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic presenter, for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Decode the prompt and build a fresh answer order. The question is not modified.
    pub fn present(&mut self, question: &Question) -> PresentedQuestion {
        PresentedQuestion {
            category: question.category().map(decode_entities),
            prompt: decode_entities(question.prompt()),
            choices: PresentedAnswerSet::for_question(question, &mut self.rng),
        }
    }
}

impl Default for AnswerPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "What does &lt;br&gt; do?",
            "Line break",
            vec!["Bold".into(), "Link".into(), "Image".into()],
        )
        .unwrap()
    }

    #[test]
    fn present_decodes_prompt_and_keeps_all_answers() {
        let mut presenter = AnswerPresenter::with_seed(9);
        let q = question();
        let presented = presenter.present(&q);

        assert_eq!(presented.prompt, "What does <br> do?");
        assert_eq!(presented.category, None);
        let mut choices = presented.choices.choices().to_vec();
        choices.sort();
        assert_eq!(choices, vec!["Bold", "Image", "Line break", "Link"]);
        assert_eq!(q, question());
    }

    #[test]
    fn present_decodes_category() {
        let q = question().with_category("Science &amp; Nature");
        let presented = AnswerPresenter::with_seed(1).present(&q);
        assert_eq!(presented.category.as_deref(), Some("Science & Nature"));
    }

    #[test]
    fn same_seed_gives_same_order() {
        let q = question();
        let a = AnswerPresenter::with_seed(123).present(&q);
        let b = AnswerPresenter::with_seed(123).present(&q);
        assert_eq!(a, b);
    }
}
