//! Application service: decide whether Vault needs installing.

use serde::Serialize;

use crate::application::ports::{BinaryLocator, CommandRunner};
use crate::application::services::version_probe;
use crate::domain::version::{InstalledBinaryInfo, RequestedVersion, install_required};

/// Probe result plus the decision taken from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallCheck {
    pub installed: InstalledBinaryInfo,
    pub requested: String,
    pub install_required: bool,
}

/// Probe the host and compare against `requested`.
///
/// "No version" counts the same as "not installed".
pub async fn check_install(
    locator: &impl BinaryLocator,
    runner: &impl CommandRunner,
    binary: &str,
    requested: &RequestedVersion,
) -> InstallCheck {
    let installed = version_probe::probe(locator, runner, binary).await;
    let required = install_required(installed.triple(), requested);
    tracing::debug!(
        installed = installed.version.as_deref().unwrap_or("none"),
        install_required = required,
        "install check complete"
    );
    InstallCheck {
        installed,
        requested: match requested {
            RequestedVersion::Present => "present".to_string(),
            RequestedVersion::Exact(v) => v.to_string(),
        },
        install_required: required,
    }
}
