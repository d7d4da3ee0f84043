//! Domain types and validators for vault-deploy settings.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::error::SettingsError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Prefix for every settings environment variable.
pub const ENV_PREFIX: &str = "VAULT_DEPLOY_";

pub const DEFAULT_BINARY: &str = "vault";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/vault/config.json";
pub const DEFAULT_CONFIG_MODE: &str = "0640";
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

// ── Settings schema ──────────────────────────────────────────────────────────

/// Tool settings, read from `VAULT_DEPLOY_*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeploySettings {
    /// Executable name searched for on the path.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Where the rendered configuration is written.
    #[serde(default = "default_config_path")]
    pub config_path: PathBuf,

    /// Octal permission bits for the rendered file.
    #[serde(default = "default_config_mode")]
    pub config_mode: String,

    /// Upper bound on the `vault version` subprocess.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Replaces `PATH` when locating the binary.
    #[serde(default)]
    pub search_path: Option<String>,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            config_path: default_config_path(),
            config_mode: default_config_mode(),
            probe_timeout_secs: default_probe_timeout_secs(),
            search_path: None,
        }
    }
}

impl DeploySettings {
    /// Check every field, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] naming the offending setting.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.validate_probe()?;
        parse_mode(&self.config_mode)?;
        Ok(())
    }

    /// Check only the fields the version probe reads (`binary`,
    /// `probe_timeout_secs`).
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] naming the offending setting.
    pub fn validate_probe(&self) -> Result<(), SettingsError> {
        if self.binary.trim().is_empty() {
            return Err(SettingsError::EmptyBinary);
        }
        if self.probe_timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        Ok(())
    }

    /// Permission bits from `config_mode`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidMode`] if the value is not octal.
    pub fn mode_bits(&self) -> Result<u32, SettingsError> {
        parse_mode(&self.config_mode)
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

fn default_config_mode() -> String {
    DEFAULT_CONFIG_MODE.to_string()
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Parse an octal permission string such as `0640` or `640`.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidMode`] for non-octal input or bits above `0o7777`.
pub fn parse_mode(value: &str) -> Result<u32, SettingsError> {
    let digits = value.strip_prefix("0o").unwrap_or(value);
    match u32::from_str_radix(digits, 8) {
        Ok(bits) if !digits.is_empty() && bits <= 0o7777 => Ok(bits),
        _ => Err(SettingsError::InvalidMode(value.to_string())),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
