//! Application service: installed-version fact.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::Path;

use crate::application::ports::{BinaryLocator, CommandRunner};
use crate::domain::version::{InstalledBinaryInfo, parse_version_output};

/// Report whether `binary` is installed and at which version.
///
/// Never fails. A missing binary, a spawn error, a non-zero exit and
/// unrecognised output all come back as "no version"; the caller cannot
/// tell them apart and should not try. Spawns at most one subprocess and
/// does not retry.
pub async fn probe(
    locator: &impl BinaryLocator,
    runner: &impl CommandRunner,
    binary: &str,
) -> InstalledBinaryInfo {
    let Some(path) = locator.locate(binary) else {
        tracing::debug!(binary, "not found on search path");
        return InstalledBinaryInfo::absent();
    };
    let version = run_version(runner, &path).await;
    InstalledBinaryInfo {
        path: Some(path),
        version,
    }
}

async fn run_version(runner: &impl CommandRunner, path: &Path) -> Option<String> {
    let Some(program) = path.to_str() else {
        tracing::debug!(path = %path.display(), "non UTF-8 binary path");
        return None;
    };

    let output = match runner.run(program, &["version"]).await {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(program, error = %e, "version command failed to run");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!(program, status = %output.status, "version command exited non-zero");
        return None;
    }

    let version = parse_version_output(&String::from_utf8_lossy(&output.stdout))
        .or_else(|| parse_version_output(&String::from_utf8_lossy(&output.stderr)));
    if version.is_none() {
        tracing::debug!(program, "version output not recognised");
    }
    version
}
