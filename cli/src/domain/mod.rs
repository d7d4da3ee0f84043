//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod apply;
pub mod config;
pub mod error;
pub mod version;

pub use apply::{ApplyOutcome, sha256_hex};
pub use config::{DeploySettings, parse_mode};
pub use error::{SettingsError, VersionError};
pub use version::{
    InstalledBinaryInfo, RequestedVersion, VersionTriple, install_required, parse_version_output,
};
