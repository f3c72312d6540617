//! I/O context threaded through the menu engine and leaf actions.

use crate::ui::{LineSource, RenderSink};
use std::io;

/// Operator input plus the renderer, borrowed for one menu session.
pub struct Console<'a> {
    input: &'a mut dyn LineSource,
    render: &'a dyn RenderSink,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn LineSource, render: &'a dyn RenderSink) -> Self {
        Self { input, render }
    }

    pub fn render(&self) -> &'a dyn RenderSink {
        self.render
    }

    pub(crate) fn read_line(&mut self) -> io::Result<Option<String>> {
        self.input.read_line()
    }
}
