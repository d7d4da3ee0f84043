//! Params file loading: the operator's desired Vault configuration.
//!
//! YAML is a superset of JSON, so one parser reads both formats.

use std::path::Path;

use anyhow::{Context, Result};
use vault_config::ServiceConfig;

/// Read and parse a params file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML/JSON, or
/// contains a key `ServiceConfig` does not know.
pub fn load_params(path: &Path) -> Result<ServiceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_params(&content).with_context(|| format!("cannot parse {}", path.display()))
}

/// Parse params from text. An empty document yields the defaults.
///
/// # Errors
///
/// Returns an error if the text is not a valid params document.
pub fn parse_params(content: &str) -> Result<ServiceConfig> {
    if content.trim().is_empty() {
        return Ok(ServiceConfig::default());
    }
    serde_yaml::from_str(content).context("invalid params document")
}
