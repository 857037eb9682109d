use std::io::{self, Write};

use services::{QuizSummary, QuizView, Verdict};

/// Line-oriented presentation surface on a terminal.
pub struct TerminalView<W: Write> {
    out: W,
    choices: Vec<String>,
    restart_available: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            choices: Vec::new(),
            restart_available: false,
        }
    }

    /// Choices currently on screen, in display order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn restart_available(&self) -> bool {
        self.restart_available
    }

    /// Map a typed number (1-based) onto the choice text it stands for.
    pub fn choice_for_input(&self, input: &str) -> Option<String> {
        let index: usize = input.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| self.choices.get(i))
            .cloned()
    }

    /// Write the input prompt. An error here means the terminal is gone.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> QuizView for TerminalView<W> {
    fn show_loading(&mut self) {
        self.choices.clear();
        let _ = writeln!(self.out, "Now loading...");
    }

    fn show_question(&mut self, number: usize, total: usize, category: Option<&str>, text: &str) {
        let _ = writeln!(self.out);
        let _ = match category {
            Some(category) => writeln!(self.out, "[{number}/{total}] ({category}) {text}"),
            None => writeln!(self.out, "[{number}/{total}] {text}"),
        };
    }

    fn show_choices(&mut self, choices: &[String]) {
        self.choices = choices.to_vec();
        for (i, choice) in self.choices.iter().enumerate() {
            let _ = writeln!(self.out, "  {}. {choice}", i + 1);
        }
    }

    fn show_verdict(&mut self, verdict: &Verdict) {
        self.choices.clear();
        let _ = match verdict {
            Verdict::Correct => writeln!(self.out, "Correct!"),
            Verdict::Incorrect { correct_answer } => writeln!(
                self.out,
                "Sorry, that's wrong... (the answer was \"{correct_answer}\")"
            ),
        };
    }

    fn show_summary(&mut self, summary: &QuizSummary) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "{summary}");
    }

    fn set_restart_available(&mut self, available: bool) {
        self.restart_available = available;
    }

    fn notify_failure(&mut self, message: &str) {
        self.choices.clear();
        let _ = writeln!(self.out, "!! {message}");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn numbers_map_to_displayed_choices() {
        let mut view = TerminalView::new(Vec::new());
        view.show_choices(&["Paris".into(), "Rome".into(), "Oslo".into(), "Bern".into()]);

        assert_eq!(view.choice_for_input("2"), Some("Rome".to_string()));
        assert_eq!(view.choice_for_input(" 4 "), Some("Bern".to_string()));
        assert_eq!(view.choice_for_input("0"), None);
        assert_eq!(view.choice_for_input("5"), None);
        assert_eq!(view.choice_for_input("Rome"), None);
    }

    #[test]
    fn renders_question_choices_and_verdicts() {
        let mut view = TerminalView::new(Vec::new());
        view.show_loading();
        view.show_question(1, 10, None, "Largest planet?");
        view.show_question(2, 10, Some("Geography"), "Longest river?");
        view.show_choices(&["Jupiter".into(), "Mars".into()]);
        view.show_verdict(&Verdict::Incorrect {
            correct_answer: "Jupiter".into(),
        });
        view.show_summary(&QuizSummary {
            correct: 0,
            total: 10,
        });

        let text = rendered(view);
        assert!(text.starts_with("Now loading...\n"));
        assert!(text.contains("[1/10] Largest planet?\n"));
        assert!(text.contains("[2/10] (Geography) Longest river?\n"));
        assert!(text.contains("  1. Jupiter\n  2. Mars\n"));
        assert!(text.contains("(the answer was \"Jupiter\")"));
        assert!(text.ends_with("0/10 corrects.\n"));
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn prompt_reports_a_closed_terminal() {
        let mut open = TerminalView::new(Vec::new());
        assert!(open.prompt("> ").is_ok());
        assert_eq!(rendered(open), "> ");

        let mut closed = TerminalView::new(ClosedOutput);
        let err = closed.prompt("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn verdict_and_failure_clear_choices() {
        let mut view = TerminalView::new(Vec::new());
        view.show_choices(&["a".into()]);
        view.show_verdict(&Verdict::Correct);
        assert!(view.choices().is_empty());

        view.show_choices(&["b".into()]);
        view.set_restart_available(true);
        view.notify_failure("Failed to load quiz... (boom)");
        assert!(view.choices().is_empty());
        assert!(view.restart_available());
        assert!(rendered(view).contains("!! Failed to load quiz... (boom)\n"));
    }
}
