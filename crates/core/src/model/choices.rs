use rand::Rng;

use crate::model::Question;
use crate::shuffle::build_choices;
use crate::text::decode_entities;

/// The four answers of one question, shuffled and decoded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedAnswerSet {
    choices: Vec<String>,
}

impl PresentedAnswerSet {
    /// Shuffle the answers of `question` and decode them for display.
    pub fn for_question<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let choices = build_choices(question, rng)
            .iter()
            .map(|answer| decode_entities(answer))
            .collect();
        Self { choices }
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}
