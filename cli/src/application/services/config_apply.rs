//! Application service: render the Vault configuration and apply it.
//!
//! Rendering is pure. Applying compares the rendered bytes with what is on
//! disk and writes only on difference, so re-applying an unchanged
//! configuration never touches the file.

use std::path::Path;

use anyhow::{Context, Result};
use vault_config::{RenderedConfig, Renderer, ServiceConfig};

use crate::application::ports::{ConfigFileStore, ProgressReporter};
use crate::domain::apply::ApplyOutcome;

/// Render `cfg`, logging any settings that belong to the other mode.
///
/// # Errors
///
/// Returns the [`vault_config::ConfigValidationError`] when a required stanza
/// is missing or malformed.
pub fn render_config(renderer: &Renderer, cfg: &ServiceConfig) -> Result<RenderedConfig> {
    let rendered = renderer.render(cfg)?;
    for stanza in rendered.ignored() {
        tracing::warn!(stanza, mode = %cfg.mode, "setting ignored in this mode");
    }
    Ok(rendered)
}

/// Write `rendered` to `path` unless the file already holds those bytes.
///
/// # Errors
///
/// Returns an error if the current file cannot be read or the new one
/// cannot be written.
pub fn apply_config(
    store: &impl ConfigFileStore,
    reporter: &impl ProgressReporter,
    rendered: &RenderedConfig,
    path: &Path,
    mode: u32,
) -> Result<ApplyOutcome> {
    reporter.step(&format!("comparing {}", path.display()));
    let current = store
        .read_current(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let outcome = ApplyOutcome::plan(path.to_path_buf(), current.as_deref(), rendered.as_bytes());
    if outcome.changed() {
        store
            .write_atomic(path, rendered.as_bytes(), mode)
            .with_context(|| format!("cannot write {}", path.display()))?;
        tracing::info!(path = %path.display(), digest = outcome.digest(), "configuration written");
        reporter.success(&format!("wrote {}", path.display()));
    } else {
        tracing::debug!(path = %path.display(), "configuration unchanged");
        reporter.success(&format!("{} unchanged", path.display()));
    }
    Ok(outcome)
}
