//! Terminal output renderer for menus, results, and status lines.

use crate::ui::settings;
use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, Write};

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
    /// Whether `clear` may wipe the screen (see [`Renderer::wipes_screen`]).
    clear_screen: bool,
    /// Whether `press_enter_to_continue` blocks on stdin.
    pause: bool,
}

impl Renderer {
    pub fn new(color: bool, clear_screen: bool, pause: bool) -> Self {
        Self {
            color,
            clear_screen,
            pause,
        }
    }

    /// Clearing only happens when output is paused first; otherwise the
    /// redraw would erase a result or error before it could be read.
    pub fn wipes_screen(&self) -> bool {
        self.clear_screen && self.pause
    }

    /// Wipe the screen and home the cursor.
    pub fn clear(&self) {
        if !self.wipes_screen() {
            return;
        }
        let mut out = io::stdout();
        let _ = out
            .queue(Clear(ClearType::All))
            .and_then(|out| out.queue(MoveTo(0, 0)))
            .and_then(|out| out.flush());
    }

    /// Print a menu title and its numbered labels.
    pub fn menu(&self, title: &str, labels: &[String]) {
        if self.color {
            println!(
                "\n{}",
                title.with(settings::COLOR_MENU_TITLE).bold().underlined()
            );
            for (idx, label) in labels.iter().enumerate() {
                println!(
                    "{} {}",
                    format!("{}.", idx + 1)
                        .with(settings::COLOR_MENU_NUMBER)
                        .bold(),
                    label.as_str().with(settings::COLOR_MENU_ITEM)
                );
            }
        } else {
            print!("{}", format_menu_plain(title, labels));
        }
    }

    /// Print the choice prompt without a trailing newline.
    pub fn choice_prompt(&self) {
        if self.color {
            print!(
                "{}",
                settings::PROMPT_CHOICE
                    .with(settings::COLOR_PROMPT_CHOICE)
                    .bold()
            );
        } else {
            print!("{}", settings::PROMPT_CHOICE);
        }
        let _ = io::stdout().flush();
    }

    /// Print `title: value(s)`.
    pub fn result(&self, title: &str, values: &[String]) {
        if self.color {
            println!(
                "{}{}",
                format!("{title}: ").with(settings::COLOR_RESULT_TITLE).bold(),
                result_body(values)
                    .with(settings::COLOR_RESULT_VALUE)
                    .bold()
            );
        } else {
            print!("{}", format_result_plain(title, values));
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            println!(
                "{}",
                format!("{} {msg}", settings::LABEL_ERROR)
                    .with(settings::COLOR_ERROR)
                    .bold()
            );
        } else {
            println!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            println!(
                "{}",
                format!("{} {msg}", settings::GLYPH_WARNING).with(settings::COLOR_WARNING)
            );
        } else {
            println!("{} {msg}", settings::GLYPH_WARNING);
        }
    }

    pub fn info(&self, msg: &str) {
        if self.color {
            println!(
                "{}",
                format!("{} {msg}", settings::GLYPH_INFO).with(settings::COLOR_INFO)
            );
        } else {
            println!("{} {msg}", settings::GLYPH_INFO);
        }
    }

    /// Print the continue hint and wait for one line on stdin.
    ///
    /// Read failures and end-of-input are ignored here; the next menu read
    /// observes them.
    pub fn press_enter_to_continue(&self) {
        if !self.pause {
            return;
        }
        if self.color {
            print!(
                "\n{}",
                settings::PROMPT_CONTINUE.with(settings::COLOR_CONTINUE)
            );
        } else {
            print!("\n{}", settings::PROMPT_CONTINUE);
        }
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

/// Result payload after the `title: ` prefix, without a trailing newline.
///
/// Zero values render as "No results", one value inline, and several values
/// one per line starting on the next line.
pub fn result_body(values: &[String]) -> String {
    match values {
        [] => settings::LABEL_NO_RESULTS.to_string(),
        [single] => single.clone(),
        many => format!("\n{}", many.join("\n")),
    }
}

/// Uncolored result rendering, newline terminated.
pub fn format_result_plain(title: &str, values: &[String]) -> String {
    format!("{title}: {}\n", result_body(values))
}

/// Uncolored menu rendering, newline terminated.
pub fn format_menu_plain(title: &str, labels: &[String]) -> String {
    let mut out = format!("\n{title}\n");
    for (idx, label) in labels.iter().enumerate() {
        out.push_str(&format!("{}. {label}\n", idx + 1));
    }
    out
}
