//! Terminal-facing UI facade.
//!
//! Groups the rendering contract, the default terminal renderer, line input,
//! and UI constants so the menu core depends on `ui` alone.

pub mod input;
pub mod render;
pub mod renderer;
pub mod settings;

pub use input::{LineSource, ReaderLines, StdinLines};
pub use render::{RenderSink, Renderer};
