//! devops-tools: an interactive terminal menu for everyday AWS chores.
//!
//! The crate is split into a small menu engine ([`menu`]) that knows nothing
//! about AWS, a set of collaborator traits with SDK-backed implementations
//! ([`aws`]), and the static menu tree that wires the two together
//! ([`actions`]).
//!
//! # Quick start
//!
//! ```no_run
//! use devops_tools::actions::build_main_menu;
//! use devops_tools::aws;
//! use devops_tools::config::{load_config, ConfigOverrides};
//! use devops_tools::menu::{run_menu, Console};
//! use devops_tools::ui::{Renderer, StdinLines};
//!
//! let loaded = load_config(None, &ConfigOverrides::default()).unwrap();
//! let collaborators = aws::connect(&loaded.config.aws).unwrap();
//! let menu = build_main_menu(&collaborators);
//! let renderer = Renderer::new(true, true, true);
//! let mut input = StdinLines;
//! let mut console = Console::new(&mut input, &renderer);
//! run_menu(&menu, &mut console).unwrap();
//! ```

pub mod actions;
pub mod aws;
pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
