//! Filesystem infrastructure: implements `ConfigFileStore`.

use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ConfigFileStore;

/// Production filesystem implementation of `ConfigFileStore`.
///
/// Writes go to a temporary file in the target directory which is then
/// renamed over the destination, so the service never reads a half-written
/// configuration.
pub struct LocalConfigFile;

impl ConfigFileStore for LocalConfigFile {
    fn read_current(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn write_atomic(&self, path: &Path, contents: &[u8], mode: u32) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        tmp.write_all(contents).context("writing temp file")?;
        tmp.as_file().sync_all().context("syncing temp file")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(mode))
                .with_context(|| format!("cannot set permissions on {}", tmp.path().display()))?;
        }
        #[cfg(not(unix))]
        let _ = mode;

        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("renaming into {}", path.display()))?;
        Ok(())
    }
}
