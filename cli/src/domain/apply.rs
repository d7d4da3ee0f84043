//! Diff-then-write decisions for the rendered configuration file.
//!
//! Pure functions only: callers read the current bytes and perform the write.

use std::path::PathBuf;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// What an apply did to the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// File already held the rendered bytes; nothing touched.
    Unchanged { path: PathBuf, digest: String },
    /// File was created or replaced.
    Written {
        path: PathBuf,
        previous_digest: Option<String>,
        digest: String,
    },
}

impl ApplyOutcome {
    /// Decide the outcome of writing `desired` over `current`.
    #[must_use]
    pub fn plan(path: PathBuf, current: Option<&[u8]>, desired: &[u8]) -> Self {
        let digest = sha256_hex(desired);
        match current {
            Some(current) if current == desired => Self::Unchanged { path, digest },
            _ => Self::Written {
                path,
                previous_digest: current.map(sha256_hex),
                digest,
            },
        }
    }

    /// Whether the managed service needs a restart to pick up the change.
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    #[must_use]
    pub fn digest(&self) -> &str {
        match self {
            Self::Unchanged { digest, .. } | Self::Written { digest, .. } => digest,
        }
    }
}

/// Lowercase hex SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
