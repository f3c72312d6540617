//! CLI entry point for devops-tools.

mod cli;

use clap::Parser;
use devops_tools::actions::build_main_menu;
use devops_tools::aws;
use devops_tools::build_info;
use devops_tools::config::{ensure_default_global_config, load_config};
use devops_tools::error::MenuError;
use devops_tools::logging;
use devops_tools::menu::{run_menu, Console};
use devops_tools::ui::{RenderSink, Renderer, StdinLines};
use tracing::{debug, info};

fn main() {
    let args = cli::Args::parse();

    match ensure_default_global_config() {
        Ok(Some(path)) => eprintln!("created default config at {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("warning: failed to initialize default config: {e}"),
    }

    let loaded = match load_config(args.config.as_deref(), &args.overrides()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let config = loaded.config;

    logging::init(&config);
    info!(
        "devops-tools {} starting; config from {}",
        build_info::startup_metadata_line(),
        loaded.source
    );

    let renderer = Renderer::new(
        config.display.color,
        config.display.clear_screen,
        config.display.pause_after_result,
    );

    let collaborators = match aws::connect(&config.aws) {
        Ok(collaborators) => collaborators,
        Err(e) => {
            renderer.show_error(&e.to_string());
            std::process::exit(1);
        }
    };
    info!(region = %config.aws.region, "connected to AWS");

    let menu = build_main_menu(&collaborators);
    let mut input = StdinLines;
    let mut console = Console::new(&mut input, &renderer);
    let outcome = run_menu(&menu, &mut console);
    report_exit(outcome, &renderer);
}

/// Both outcomes end the process with status 0; closed input gets a note.
fn report_exit(outcome: Result<(), MenuError>, render: &dyn RenderSink) {
    match outcome {
        Ok(()) => info!("exiting"),
        Err(MenuError::InputClosed) => {
            debug!("operator input closed");
            render.show_info("Input closed; exiting.");
        }
    }
}
