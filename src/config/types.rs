//! Configuration data model.
//!
//! Struct/enum definitions plus their defaults. Source resolution and
//! precedence live in `config::mod`.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use super::defaults::{CONFIG_FILE_NAME, DEFAULT_LOG_FILTER, DEFAULT_REGION};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub aws: AwsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// AWS client settings handed to the collaborators at startup.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AwsConfig {
    pub region: String,
    /// Named shared-config profile. `None` uses the SDK default chain.
    pub profile: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Clear the screen before each menu redraw. Has no effect while
    /// `pause_after_result` is off.
    pub clear_screen: bool,
    /// Wait for Enter after each rendered result or error.
    pub pause_after_result: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            pause_after_result: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Command-line overrides; `None`/`false` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub no_color: bool,
    pub no_pause: bool,
    pub log_filter: Option<String>,
}

/// Where the active configuration text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::Local => write!(f, "./{CONFIG_FILE_NAME}"),
            Self::BuiltInDefaults => f.write_str("built-in defaults"),
        }
    }
}

/// Resolved config plus its source, for startup logging.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
