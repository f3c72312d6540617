//! Rendering contract consumed by the menu engine and leaf actions.
//!
//! `Renderer` is the default terminal implementation; tests substitute a
//! recording sink without touching stdout.

pub use crate::ui::renderer::Renderer;

/// Injectable rendering interface used by the menu core.
pub trait RenderSink {
    /// Clear the visible screen before a menu redraw.
    fn clear(&self);
    /// Render a menu title followed by its 1-based numbered labels.
    fn show_menu(&self, title: &str, labels: &[String]);
    /// Render the choice prompt that precedes a line read.
    fn prompt_choice(&self);
    /// Render a titled result; empty `values` renders as "No results".
    fn show_result(&self, title: &str, values: &[String]);
    /// Render an error line.
    fn show_error(&self, msg: &str);
    /// Render a warning line.
    fn show_warning(&self, msg: &str);
    /// Render an informational line.
    fn show_info(&self, msg: &str);
    /// Block until the operator acknowledges the last output.
    fn pause_for_acknowledgement(&self);
}

impl RenderSink for Renderer {
    fn clear(&self) {
        self.clear();
    }

    fn show_menu(&self, title: &str, labels: &[String]) {
        self.menu(title, labels);
    }

    fn prompt_choice(&self) {
        self.choice_prompt();
    }

    fn show_result(&self, title: &str, values: &[String]) {
        self.result(title, values);
    }

    fn show_error(&self, msg: &str) {
        self.error(msg);
    }

    fn show_warning(&self, msg: &str) {
        self.warn(msg);
    }

    fn show_info(&self, msg: &str) {
        self.info(msg);
    }

    fn pause_for_acknowledgement(&self) {
        self.press_enter_to_continue();
    }
}
