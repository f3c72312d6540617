//! Selection protocol: numbered choice with retry, and yes/no confirmation.
//!
//! Malformed and out-of-range input is recovered here and never reaches the
//! caller. End-of-input is different: retrying a closed stream would spin
//! forever, so it surfaces as [`InputClosed`] and unwinds the menu stack.

use crate::error::InputClosed;
use crate::menu::Console;
use crate::ui::settings;
use std::fmt;
use tracing::{debug, warn};

/// Why one line of input was not a usable choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    /// Not an integer.
    Bad(String),
    /// An integer outside `[1, len]`.
    Invalid(i64),
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bad(input) => write!(f, "bad choice: `{input}` is not a number"),
            Self::Invalid(n) => write!(f, "invalid choice: {n}"),
        }
    }
}

impl std::error::Error for ChoiceError {}

/// Parse one input line as a 1-based index into a list of `len` labels.
pub fn parse_choice(line: &str, len: usize) -> Result<usize, ChoiceError> {
    let trimmed = line.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| ChoiceError::Bad(trimmed.to_string()))?;
    match usize::try_from(n) {
        Ok(idx) if (1..=len).contains(&idx) => Ok(idx),
        _ => Err(ChoiceError::Invalid(n)),
    }
}

enum ReadFailure {
    Choice(ChoiceError),
    Closed,
}

/// Show the menu once, read one line, and validate it.
fn choose_once(
    console: &mut Console<'_>,
    label: &str,
    labels: &[String],
) -> Result<usize, ReadFailure> {
    let render = console.render();
    render.show_menu(label, labels);
    render.prompt_choice();
    let line = match console.read_line() {
        Ok(Some(line)) => line,
        Ok(None) => return Err(ReadFailure::Closed),
        Err(e) => {
            warn!(error = %e, "failed to read operator input");
            return Err(ReadFailure::Closed);
        }
    };
    parse_choice(&line, labels.len()).map_err(ReadFailure::Choice)
}

/// Prompt until the operator enters a valid 1-based index into `labels`.
///
/// `labels` must be non-empty. The returned index is always within
/// `[1, labels.len()]`.
pub fn choose_with_retry(
    console: &mut Console<'_>,
    label: &str,
    labels: &[String],
) -> Result<usize, InputClosed> {
    debug_assert!(!labels.is_empty(), "choose_with_retry needs labels");
    loop {
        match choose_once(console, label, labels) {
            Ok(choice) => {
                debug!(menu = label, choice, "selection accepted");
                return Ok(choice);
            }
            Err(ReadFailure::Choice(e)) => {
                debug!(menu = label, error = %e, "selection rejected");
                let render = console.render();
                render.show_error(&e.to_string());
                render.pause_for_acknowledgement();
                render.clear();
            }
            Err(ReadFailure::Closed) => return Err(InputClosed),
        }
    }
}

/// Ask a yes/no question once.
///
/// Returns `true` only when the first read selects "Yes". Any read or parse
/// failure declines without retrying.
pub fn confirm(console: &mut Console<'_>, label: &str) -> bool {
    let labels = [settings::LABEL_YES.to_string(), settings::LABEL_NO.to_string()];
    match choose_once(console, label, &labels) {
        Ok(choice) => choice == 1,
        Err(ReadFailure::Choice(e)) => {
            console.render().show_warning(&format!("{e}; treating as No"));
            false
        }
        Err(ReadFailure::Closed) => {
            console
                .render()
                .show_warning(&format!("{InputClosed}; treating as No"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{labels, RecordingRenderer, RenderEvent, ScriptedInput};
    use crate::ui::LineSource;
    use std::io;

    #[test]
    fn parse_accepts_bounds_and_whitespace() {
        // Both ends of the range are valid; surrounding spaces are ignored.
        assert_eq!(parse_choice("1", 3), Ok(1));
        assert_eq!(parse_choice(" 3 ", 3), Ok(3));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        // Zero, negatives, and len+1 are numbers but not options.
        assert_eq!(parse_choice("0", 3), Err(ChoiceError::Invalid(0)));
        assert_eq!(parse_choice("4", 3), Err(ChoiceError::Invalid(4)));
        assert_eq!(parse_choice("-2", 3), Err(ChoiceError::Invalid(-2)));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        // Anything `i64::from_str` refuses is a bad choice, including blank lines.
        assert_eq!(parse_choice("abc", 3), Err(ChoiceError::Bad("abc".into())));
        assert_eq!(parse_choice("", 3), Err(ChoiceError::Bad(String::new())));
        assert_eq!(parse_choice("1.5", 3), Err(ChoiceError::Bad("1.5".into())));
    }

    #[test]
    fn choice_error_messages() {
        assert_eq!(
            ChoiceError::Bad("x".into()).to_string(),
            "bad choice: `x` is not a number"
        );
        assert_eq!(ChoiceError::Invalid(9).to_string(), "invalid choice: 9");
    }

    #[test]
    fn bad_choice_then_valid_choice() {
        // A typo is reported and the same menu is shown again.
        let mut input = ScriptedInput::new(["abc", "1"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);

        let choice = choose_with_retry(&mut console, "ALB", &labels(&["List ALBs", "Back"]));

        assert_eq!(choice, Ok(1));
        assert_eq!(render.errors(), vec!["bad choice: `abc` is not a number"]);
        assert_eq!(render.count(|e| matches!(e, RenderEvent::Menu { .. })), 2);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn out_of_range_reprompts_with_invalid_choice() {
        let mut input = ScriptedInput::new(["0", "7", "2"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);

        let choice = choose_with_retry(&mut console, "ALB", &labels(&["List ALBs", "Back"]));

        assert_eq!(choice, Ok(2));
        assert_eq!(
            render.errors(),
            vec!["invalid choice: 0", "invalid choice: 7"]
        );
    }

    #[test]
    fn retry_pauses_then_clears_before_reprompt() {
        // The error stays visible until acknowledged, then the menu is redrawn.
        let mut input = ScriptedInput::new(["x", "1"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);
        choose_with_retry(&mut console, "Main", &labels(&["Exit"])).unwrap();

        let events = render.events();
        let error_at = events
            .iter()
            .position(|e| matches!(e, RenderEvent::Error(_)))
            .unwrap();
        assert_eq!(events[error_at + 1], RenderEvent::Pause);
        assert_eq!(events[error_at + 2], RenderEvent::Clear);
        assert!(matches!(events[error_at + 3], RenderEvent::Menu { .. }));
    }

    #[test]
    fn end_of_input_is_propagated() {
        // A closed stream must not loop forever on re-prompts.
        let mut input = ScriptedInput::new(["nope"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);

        let choice = choose_with_retry(&mut console, "Main", &labels(&["A", "Exit"]));

        assert_eq!(choice, Err(InputClosed));
        assert_eq!(render.errors().len(), 1);
    }

    #[test]
    fn read_failure_is_treated_as_closed_input() {
        struct Broken;
        impl LineSource for Broken {
            fn read_line(&mut self) -> io::Result<Option<String>> {
                Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8"))
            }
        }
        let mut input = Broken;
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);

        assert_eq!(
            choose_with_retry(&mut console, "Main", &labels(&["Exit"])),
            Err(InputClosed)
        );
    }

    #[test]
    fn confirm_yes() {
        let mut input = ScriptedInput::new(["1"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);
        assert!(confirm(&mut console, "Restart X?"));
        assert_eq!(
            render.events()[0],
            RenderEvent::Menu {
                title: "Restart X?".into(),
                labels: labels(&["Yes", "No"]),
            }
        );
    }

    #[test]
    fn confirm_no() {
        let mut input = ScriptedInput::new(["2"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);
        assert!(!confirm(&mut console, "Restart X?"));
        assert!(render.warnings().is_empty());
    }

    #[test]
    fn confirm_declines_on_bad_input_without_retrying() {
        // Only one line is consumed; the leftover "1" must not count as Yes.
        let mut input = ScriptedInput::new(["yes", "1"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);

        assert!(!confirm(&mut console, "Restart X?"));
        assert_eq!(input.remaining(), 1);
        assert_eq!(render.warnings().len(), 1);
        assert!(render.errors().is_empty());
    }

    #[test]
    fn confirm_declines_on_out_of_range_and_closed_input() {
        // Each decline explains itself with a warning.
        let mut input = ScriptedInput::new(["3"]);
        let render = RecordingRenderer::default();
        let mut console = Console::new(&mut input, &render);
        assert!(!confirm(&mut console, "Rollback X?"));
        assert!(!confirm(&mut console, "Rollback X?"));
        assert_eq!(
            render.warnings(),
            vec![
                "invalid choice: 3; treating as No",
                "input closed; treating as No"
            ]
        );
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parsed_choice_is_always_in_range(line in ".{0,12}", len in 1usize..50) {
                if let Ok(idx) = parse_choice(&line, len) {
                    prop_assert!(idx >= 1 && idx <= len);
                }
            }

            #[test]
            fn choose_with_retry_returns_in_range_or_closed(
                lines in proptest::collection::vec("(-?[0-9]{1,3}|[a-z ]{0,4})", 0..12),
                len in 1usize..8,
            ) {
                let mut input = ScriptedInput::new(lines);
                let render = RecordingRenderer::default();
                let mut console = Console::new(&mut input, &render);
                let names: Vec<String> = (1..=len).map(|i| format!("item {i}")).collect();
                match choose_with_retry(&mut console, "Fuzz", &names) {
                    Ok(idx) => prop_assert!(idx >= 1 && idx <= len),
                    Err(InputClosed) => {}
                }
            }
        }
    }
}
