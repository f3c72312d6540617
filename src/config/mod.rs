//! Configuration loading from TOML files, environment variables, and CLI flags.
//!
//! Precedence (highest wins):
//! 1. CLI flags (`--region`, `--profile`, `--no-color`, `--no-pause`, `--log`)
//! 2. Environment variables (`DEVOPS_TOOLS_REGION`, `DEVOPS_TOOLS_PROFILE`,
//!    `DEVOPS_TOOLS_LOG`, `NO_COLOR`)
//! 3. TOML file given via `--config`
//! 4. `./devops-tools.toml` in the current directory
//! 5. `$XDG_CONFIG_HOME/devops-tools/devops-tools.toml`
//!    (or `~/.config/devops-tools/devops-tools.toml`)
//! 6. Built-in defaults

use crate::error::ConfigError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
pub use defaults::DEFAULT_LOG_FILTER;
use env::apply_runtime_env_overrides;
pub use types::{
    AwsConfig, Config, ConfigOverrides, ConfigSource, DisplayConfig, LoadedConfig, LoggingConfig,
};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment, then apply CLI overrides.
///
/// `path_override` is an explicit config file path (from `--config`); unlike
/// the implicit locations it must exist.
pub fn load_config(
    path_override: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        overrides,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    overrides: &ConfigOverrides,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    apply_overrides(&mut config, overrides);
    validate(&config)?;
    Ok(LoadedConfig { config, source })
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Apply command-line overrides on top of file + env values.
pub fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(region) = normalized(overrides.region.as_deref()) {
        config.aws.region = region;
    }
    if let Some(profile) = normalized(overrides.profile.as_deref()) {
        config.aws.profile = Some(profile);
    }
    if let Some(filter) = normalized(overrides.log_filter.as_deref()) {
        config.logging.filter = filter;
    }
    if overrides.no_color {
        config.display.color = false;
    }
    if overrides.no_pause {
        config.display.pause_after_result = false;
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.aws.region.trim().is_empty() {
        return Err(ConfigError::Invalid("aws.region must not be empty".into()));
    }
    if config
        .aws
        .profile
        .as_deref()
        .is_some_and(|p| p.trim().is_empty())
    {
        return Err(ConfigError::Invalid(
            "aws.profile must not be blank; remove the key to use the default chain".into(),
        ));
    }
    Ok(())
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Global config file
// ---------------------------------------------------------------------------

/// Return the default per-user config path
/// (`~/.config/devops-tools/devops-tools.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    global_config_path_under(config_root_dir())
}

fn global_config_path_under(root: Option<PathBuf>) -> Option<PathBuf> {
    root.map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Seed the per-user config file from the bundled template on first run.
///
/// Returns the path only when this call wrote the file; an existing file is
/// never touched.
pub fn ensure_default_global_config() -> Result<Option<PathBuf>, ConfigError> {
    seed_global_config(config_root_dir())
}

fn seed_global_config(root: Option<PathBuf>) -> Result<Option<PathBuf>, ConfigError> {
    let Some(path) = global_config_path_under(root) else {
        return Ok(None);
    };
    Ok(write_template_if_missing(&path)?.then_some(path))
}

/// `true` when the template was written, `false` when a file already existed.
fn write_template_if_missing(path: &Path) -> Result<bool, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
    Ok(true)
}

/// Config root: an absolute `$XDG_CONFIG_HOME`, then `~/.config`, then the
/// platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
