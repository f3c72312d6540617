//! Compile-time build metadata for `--version` and the startup log line.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git commit captured by `build.rs`.
pub const GIT_COMMIT: &str = env!("DEVOPS_TOOLS_BUILD_GIT_HASH");

/// UTC build time captured by `build.rs`.
pub const BUILD_TIMESTAMP: &str = env!("DEVOPS_TOOLS_BUILD_TIMESTAMP");

/// Trailer appended to `devops-tools --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("DEVOPS_TOOLS_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("DEVOPS_TOOLS_BUILD_TIMESTAMP")
);

/// One-line summary logged at startup.
pub fn startup_metadata_line() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}

/// Text clap prints after the binary name for `devops-tools --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("DEVOPS_TOOLS_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("DEVOPS_TOOLS_BUILD_TIMESTAMP")
);
