//! Result model shared by every leaf action.

use crate::error::ActionError;
use crate::menu::Console;
use crate::ui::RenderSink;

/// A titled list of values produced by a successful leaf action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub title: String,
    /// Possibly empty, never absent; empty renders as "No results".
    pub values: Vec<String>,
}

impl ActionResult {
    pub fn new(title: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            title: title.into(),
            values,
        }
    }

    pub fn single(title: impl Into<String>, value: impl ToString) -> Self {
        Self::new(title, vec![value.to_string()])
    }

    pub fn render(&self, sink: &dyn RenderSink) {
        sink.show_result(&self.title, &self.values);
    }
}

/// `Ok(None)` is a valid outcome with nothing to display (e.g. a declined
/// confirmation).
pub type ActionOutcome = Result<Option<ActionResult>, ActionError>;

/// Callable bound to a leaf menu entry.
pub type LeafAction = Box<dyn Fn(&mut Console<'_>) -> ActionOutcome>;
