mod choices;
mod question;

pub use choices::PresentedAnswerSet;
pub use question::{INCORRECT_ANSWERS_PER_QUESTION, Question, QuestionError};
