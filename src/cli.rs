//! CLI argument parsing via clap.

use clap::Parser;
use devops_tools::build_info;
use devops_tools::config::ConfigOverrides;

/// Interactive terminal menu for AWS load balancers, ECS services, and EKS
/// clusters.
#[derive(Debug, Parser)]
#[command(
    name = "devops-tools",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./devops-tools.toml or
    /// ~/.config/devops-tools/devops-tools.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override AWS region.
    #[arg(short = 'r', long = "region")]
    pub region: Option<String>,

    /// Use a named AWS profile from the shared config files.
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Do not wait for Enter after results and errors.
    #[arg(long = "no-pause")]
    pub no_pause: bool,

    /// Log filter directive written to stderr (e.g. `debug`,
    /// `devops_tools=trace`).
    #[arg(long = "log", value_name = "FILTER")]
    pub log: Option<String>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            region: self.region.clone(),
            profile: self.profile.clone(),
            no_color: self.no_color,
            no_pause: self.no_pause,
            log_filter: self.log.clone(),
        }
    }
}
