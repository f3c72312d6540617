//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak labels, glyphs, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Labels / glyphs
// ---------------------------------------------------------------------------

pub const LABEL_EXIT: &str = "Exit";
pub const LABEL_BACK: &str = "Back";
pub const LABEL_YES: &str = "Yes";
pub const LABEL_NO: &str = "No";

pub const PROMPT_CHOICE: &str = "Choice: ";
pub const PROMPT_CONTINUE: &str = "Press Enter to continue...";

pub const LABEL_ERROR: &str = "Error:";
pub const LABEL_NO_RESULTS: &str = "No results";

pub const GLYPH_WARNING: &str = "⚠";
pub const GLYPH_INFO: &str = "ℹ";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_MENU_TITLE: Color = Color::Cyan;
pub const COLOR_MENU_NUMBER: Color = Color::Yellow;
pub const COLOR_MENU_ITEM: Color = Color::White;
pub const COLOR_PROMPT_CHOICE: Color = Color::Green;

pub const COLOR_RESULT_TITLE: Color = Color::Blue;
pub const COLOR_RESULT_VALUE: Color = Color::Green;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_INFO: Color = Color::Cyan;
pub const COLOR_CONTINUE: Color = Color::DarkGrey;
