//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Version errors ────────────────────────────────────────────────────────────

/// Errors parsing a version supplied by the operator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version '{0}': expected MAJOR.MINOR.PATCH or 'present'")]
    Invalid(String),
}

// ── Settings errors ───────────────────────────────────────────────────────────

/// Errors related to tool settings loaded from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Binary name must not be empty (VAULT_DEPLOY_BINARY)")]
    EmptyBinary,

    #[error("Invalid file mode '{0}': expected an octal value such as 0640")]
    InvalidMode(String),

    #[error("Probe timeout must be at least one second (VAULT_DEPLOY_PROBE_TIMEOUT_SECS)")]
    ZeroTimeout,
}
