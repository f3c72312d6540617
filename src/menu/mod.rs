//! Hierarchical menu model and the loop that drives it.
//!
//! A [`MenuNode`] owns an ordered list of [`MenuEntry`] values; each entry is
//! either a nested menu or a leaf action. [`run_menu`] redraws the current
//! menu, reads a selection, dispatches it, renders the outcome, and repeats
//! until the operator picks the trailing "Back" (or "Exit" at the root).
//!
//! The terminal option is always appended last, so its 1-based index is
//! `entries.len() + 1`.

mod console;
pub mod outcome;
pub mod select;

pub use console::Console;
pub use outcome::{ActionOutcome, ActionResult, LeafAction};
pub use select::{choose_with_retry, confirm, parse_choice, ChoiceError};

use crate::error::{ActionError, MenuError};
use crate::ui::{settings, RenderSink};
use std::fmt;
use tracing::debug;

/// What selecting an entry does.
pub enum EntryKind {
    Submenu(MenuNode),
    Leaf(LeafAction),
}

impl fmt::Debug for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submenu(node) => f.debug_tuple("Submenu").field(node).finish(),
            Self::Leaf(_) => f.write_str("Leaf(..)"),
        }
    }
}

/// One numbered line in a menu.
#[derive(Debug)]
pub struct MenuEntry {
    label: String,
    kind: EntryKind,
}

impl MenuEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }
}

/// A menu and its entries, built once at startup and never mutated while
/// running.
#[derive(Debug)]
pub struct MenuNode {
    label: String,
    entries: Vec<MenuEntry>,
    is_root: bool,
}

impl MenuNode {
    /// Top-level menu; its terminal option is "Exit".
    pub fn root(label: impl Into<String>) -> Self {
        Self::new(label, true)
    }

    /// Nested menu; its terminal option is "Back".
    pub fn submenu(label: impl Into<String>) -> Self {
        Self::new(label, false)
    }

    fn new(label: impl Into<String>, is_root: bool) -> Self {
        let label = label.into();
        debug_assert!(!label.is_empty(), "menu labels must be non-empty");
        Self {
            label,
            entries: Vec::new(),
            is_root,
        }
    }

    /// Append a leaf action entry.
    pub fn leaf<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut Console<'_>) -> ActionOutcome + 'static,
    {
        self.entries.push(MenuEntry {
            label: label.into(),
            kind: EntryKind::Leaf(Box::new(action)),
        });
        self
    }

    /// Append a nested menu entry labelled with the child's own label.
    pub fn nest(mut self, child: MenuNode) -> Self {
        self.entries.push(MenuEntry {
            label: child.label.clone(),
            kind: EntryKind::Submenu(child),
        });
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn terminal_label(&self) -> &'static str {
        if self.is_root {
            settings::LABEL_EXIT
        } else {
            settings::LABEL_BACK
        }
    }

    /// 1-based index of the trailing Back/Exit option.
    pub fn terminal_index(&self) -> usize {
        self.entries.len() + 1
    }

    /// Entry labels in display order followed by the terminal label.
    pub fn labels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.label.clone())
            .chain(std::iter::once(self.terminal_label().to_string()))
            .collect()
    }
}

/// Run `menu` until the operator selects its terminal option.
///
/// Collaborator errors from leaf actions are rendered and the loop continues.
/// `Err(MenuError::InputClosed)` means operator input ended somewhere below
/// this menu; every enclosing `run_menu` returns it unchanged.
pub fn run_menu(menu: &MenuNode, console: &mut Console<'_>) -> Result<(), MenuError> {
    loop {
        console.render().clear();
        let labels = menu.labels();
        let choice = choose_with_retry(console, &menu.label, &labels)?;
        if choice == menu.terminal_index() {
            debug!(menu = %menu.label, "leaving menu");
            return Ok(());
        }

        let entry = &menu.entries[choice - 1];
        debug!(menu = %menu.label, entry = %entry.label, "dispatching menu entry");
        match &entry.kind {
            EntryKind::Submenu(child) => run_menu(child, console)?,
            EntryKind::Leaf(action) => {
                let outcome = action(&mut *console);
                render_outcome(&entry.label, outcome, console.render())?;
            }
        }
    }
}

fn render_outcome(
    entry: &str,
    outcome: ActionOutcome,
    render: &dyn RenderSink,
) -> Result<(), MenuError> {
    match outcome {
        Ok(Some(result)) => {
            result.render(render);
            render.pause_for_acknowledgement();
        }
        Ok(None) => {}
        Err(ActionError::Collaborator(e)) => {
            debug!(entry, error = %e, "menu action failed");
            render.show_error(&e.to_string());
            render.pause_for_acknowledgement();
        }
        Err(ActionError::InputClosed) => return Err(MenuError::InputClosed),
    }
    Ok(())
}
