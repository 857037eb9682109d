mod terminal;

use std::fmt;
use std::io::Stdout;
use std::sync::Arc;

use services::config::API_URL_ENV;
use services::{AnswerPresenter, OpenTdbClient, QuizConfig, QuizController, QuizEvent, QuizPhase};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalView;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidApiUrl(services::ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidApiUrl(err) => write!(f, "invalid --api-url value: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::config::DEFAULT_API_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_URL_ENV}, RUST_LOG");
    eprintln!();
    eprintln!("Answer with the choice number, r to restart, q to quit.");
}

#[derive(Debug)]
struct Args {
    config: QuizConfig,
    seed: Option<u64>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut config = QuizConfig::from_env().map_err(ArgsError::InvalidApiUrl)?;
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    config = QuizConfig::new(value).map_err(ArgsError::InvalidApiUrl)?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { config, seed }))
    }
}

fn init_tracing() {
    // Quiz text owns stdout; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Translate one line of user input into a controller event.
fn event_for_input(
    line: &str,
    phase: QuizPhase,
    view: &TerminalView<Stdout>,
) -> Result<QuizEvent, &'static str> {
    match phase {
        QuizPhase::Presenting { position } => view
            .choice_for_input(line)
            .map(|text| QuizEvent::ChoiceSelected {
                question: position,
                text,
            })
            .ok_or("Type the number of your answer."),
        QuizPhase::Finished(_) | QuizPhase::Idle => {
            if line.eq_ignore_ascii_case("r") && view.restart_available() {
                Ok(QuizEvent::RestartRequested)
            } else {
                Err("Type r to restart or q to quit.")
            }
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            return Err(e.into());
        }
    };

    init_tracing();
    info!(api_url = parsed.config.api_url(), "starting trivia quiz");

    let source = Arc::new(OpenTdbClient::new(parsed.config));
    let presenter = parsed
        .seed
        .map_or_else(AnswerPresenter::new, AnswerPresenter::with_seed);
    let mut controller =
        QuizController::new(source, TerminalView::new(std::io::stdout())).with_presenter(presenter);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut phase = controller.start_session().await;

    loop {
        let hint = match phase {
            QuizPhase::Presenting { .. } => "> ",
            QuizPhase::Finished(_) | QuizPhase::Idle => "[r]estart / [q]uit > ",
        };
        if let Err(err) = controller.view_mut().prompt(hint) {
            info!(error = %err, "terminal closed, stopping");
            break;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }

        match event_for_input(line, phase, controller.view()) {
            Ok(event) => phase = controller.handle(event).await,
            Err(hint) => println!("{hint}"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{QuizSummary, QuizView};

    fn args(list: &[&str]) -> Result<Option<Args>, ArgsError> {
        Args::parse(&mut list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_api_url_and_seed() {
        let parsed = args(&["--api-url", "http://localhost:9000/api.php", "--seed", "7"])
            .unwrap()
            .unwrap();
        assert_eq!(parsed.config.api_url(), "http://localhost:9000/api.php");
        assert_eq!(parsed.seed, Some(7));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            args(&["--seed"]),
            Err(ArgsError::MissingValue { flag: "--seed" })
        ));
        assert!(matches!(
            args(&["--seed", "x"]),
            Err(ArgsError::InvalidSeed { .. })
        ));
        assert!(matches!(
            args(&["--api-url", ""]),
            Err(ArgsError::InvalidApiUrl(_))
        ));
        assert!(matches!(args(&["--verbose"]), Err(ArgsError::UnknownArg(_))));
        assert!(matches!(args(&["-h"]), Ok(None)));
    }

    #[test]
    fn input_maps_to_events_by_phase() {
        let mut view = TerminalView::new(std::io::stdout());
        view.show_choices(&["Yes".into(), "No".into()]);

        let event = event_for_input("2", QuizPhase::Presenting { position: 3 }, &view).unwrap();
        assert_eq!(
            event,
            QuizEvent::ChoiceSelected {
                question: 3,
                text: "No".into()
            }
        );
        assert!(event_for_input("r", QuizPhase::Presenting { position: 3 }, &view).is_err());

        let finished = QuizPhase::Finished(QuizSummary {
            correct: 1,
            total: 2,
        });
        assert!(event_for_input("r", finished, &view).is_err());
        view.set_restart_available(true);
        assert_eq!(
            event_for_input("R", finished, &view).unwrap(),
            QuizEvent::RestartRequested
        );
    }
}
