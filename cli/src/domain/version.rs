//! Installed-version fact: parsing and install decisions.
//!
//! Pure functions only: no I/O, no async, no process execution.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::error::VersionError;

/// Matches the banner printed by `vault version`, e.g.
/// `Vault v1.19.2 (a1b2c3d), built 2025-04-16T10:40:47Z`.
static VAULT_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern and cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"Vault v([0-9]+\.[0-9]+\.[0-9]+)").expect("valid regex")
});

// ── Types ─────────────────────────────────────────────────────────────────────

/// What the probe found on this host. Recomputed on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstalledBinaryInfo {
    /// Resolved executable path, if the binary is on the search path.
    pub path: Option<PathBuf>,
    /// `MAJOR.MINOR.PATCH` parsed from the binary's own output.
    pub version: Option<String>,
}

impl InstalledBinaryInfo {
    /// Nothing found.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }

    /// The parsed version as a comparable triple.
    #[must_use]
    pub fn triple(&self) -> Option<VersionTriple> {
        self.version.as_deref().and_then(|v| v.parse().ok())
    }
}

/// Semantic version core. All components are non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTriple {
    type Err = VersionError;

    /// Strict `X.Y.Z`, digits only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionError::Invalid(s.to_string());
        let mut parts = s.split('.');
        let mut next = || -> Result<u64, VersionError> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };
        let triple = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(triple)
    }
}

impl From<VersionTriple> for semver::Version {
    fn from(v: VersionTriple) -> Self {
        semver::Version::new(v.major, v.minor, v.patch)
    }
}

/// Version the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedVersion {
    /// Any installed version will do.
    Present,
    /// A specific release, e.g. `1.19.2` or `1.15.0+ent`.
    Exact(semver::Version),
}

impl FromStr for RequestedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "present" | "installed" => Ok(Self::Present),
            _ => semver::Version::parse(s.strip_prefix('v').unwrap_or(s))
                .map(Self::Exact)
                .map_err(|_| VersionError::Invalid(s.to_string())),
        }
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Extract `MAJOR.MINOR.PATCH` from the first `Vault vX.Y.Z` in `output`.
///
/// The prefix is matched literally: capital `V`, one space, lowercase `v`.
#[must_use]
pub fn parse_version_output(output: &str) -> Option<String> {
    VAULT_VERSION_RE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Whether the binary has to be (re)installed to satisfy `requested`.
///
/// A missing or unreadable installation always needs an install. Build
/// metadata (`+ent`) is ignored when comparing.
#[must_use]
pub fn install_required(installed: Option<VersionTriple>, requested: &RequestedVersion) -> bool {
    let Some(installed) = installed else {
        return true;
    };
    match requested {
        RequestedVersion::Present => false,
        RequestedVersion::Exact(wanted) => {
            let mut wanted = wanted.clone();
            wanted.build = semver::BuildMetadata::EMPTY;
            wanted > semver::Version::from(installed)
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
