//! Infrastructure implementation of the `BinaryLocator` port.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::application::ports::BinaryLocator;

/// Looks binaries up on `PATH`, or on an explicit search path when given.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    search_path: Option<OsString>,
}

impl PathLocator {
    /// Use the process `PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Use `search_path` (colon-separated on unix) instead of `PATH`.
    #[must_use]
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl BinaryLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
                which::which_in(name, Some(paths), cwd)
            }
            None => which::which(name),
        };
        found.ok()
    }
}
