//! Settings loading from `VAULT_DEPLOY_*` environment variables.

use anyhow::{Context, Result};

use crate::domain::config::{DeploySettings, ENV_PREFIX};

/// Load and validate settings from the process environment.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or a value is invalid.
pub fn load_settings() -> Result<DeploySettings> {
    settings_from_vars(std::env::vars())
}

/// Load settings for commands that only probe the installed binary.
///
/// Only `binary` and `probe_timeout_secs` are validated. Anything wrong
/// with them falls back to the defaults with a warning, so the probe still
/// runs.
#[must_use]
pub fn load_probe_settings() -> DeploySettings {
    probe_settings_from_vars(std::env::vars())
}

/// [`load_probe_settings`] over an explicit variable list.
#[must_use]
pub fn probe_settings_from_vars(
    vars: impl IntoIterator<Item = (String, String)>,
) -> DeploySettings {
    let loaded = envy::prefixed(ENV_PREFIX)
        .from_iter(vars)
        .with_context(|| format!("invalid {ENV_PREFIX}* environment"))
        .and_then(|settings: DeploySettings| {
            settings.validate_probe()?;
            Ok(settings)
        });
    loaded.unwrap_or_else(|e| {
        tracing::warn!("ignoring {ENV_PREFIX}* settings, using defaults: {e:#}");
        DeploySettings::default()
    })
}

/// Load and validate settings from an explicit variable list.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or a value is invalid.
pub fn settings_from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<DeploySettings> {
    let settings: DeploySettings = envy::prefixed(ENV_PREFIX)
        .from_iter(vars)
        .with_context(|| format!("invalid {ENV_PREFIX}* environment"))?;
    settings.validate()?;
    Ok(settings)
}
