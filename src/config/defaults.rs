//! Default configuration constants and the bundled config template.

/// Embedded `devops-tools.toml` written on first run.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/devops-tools.toml");
/// Region used when neither file nor env selects one.
pub(super) const DEFAULT_REGION: &str = "us-east-1";
/// Log filter used when neither flag, env, nor file selects one.
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Directory and file name under the config root.
pub(super) const CONFIG_DIR_NAME: &str = "devops-tools";
pub(super) const CONFIG_FILE_NAME: &str = "devops-tools.toml";
