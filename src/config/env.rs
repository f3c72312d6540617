//! Environment-variable overrides.
//!
//! `DEVOPS_TOOLS_*` variables override values read from the config file.
//! Blank values are ignored so `FOO= devops-tools` does not wipe a setting.

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_REGION: &str = "DEVOPS_TOOLS_REGION";
pub(super) const ENV_PROFILE: &str = "DEVOPS_TOOLS_PROFILE";
pub(super) const ENV_LOG: &str = "DEVOPS_TOOLS_LOG";
pub(super) const ENV_NO_COLOR: &str = "NO_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(region) = non_blank(env_lookup, ENV_REGION) {
        if region.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "invalid {ENV_REGION} value `{region}`: region names contain no whitespace"
            )));
        }
        config.aws.region = region;
    }
    if let Some(profile) = non_blank(env_lookup, ENV_PROFILE) {
        config.aws.profile = Some(profile);
    }
    if let Some(filter) = non_blank(env_lookup, ENV_LOG) {
        config.logging.filter = filter;
    }
    // no-color.org: presence disables color regardless of value.
    if env_lookup(ENV_NO_COLOR).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
