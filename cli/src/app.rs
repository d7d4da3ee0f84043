//! Application context: unified state passed to every command handler.
//!
//! `AppContext` bundles output styling, settings and the production port
//! implementations so command signatures stay stable as concerns are added.

use crate::domain::config::DeploySettings;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalConfigFile;
use crate::infra::locator::PathLocator;
use crate::output::OutputContext;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Settings loaded from `VAULT_DEPLOY_*`.
    pub settings: DeploySettings,
    /// Runs `vault version`, bounded by the configured probe timeout.
    pub runner: TokioCommandRunner,
    /// Finds the Vault binary.
    pub locator: PathLocator,
    /// Reads and replaces the rendered configuration file.
    pub config_file: LocalConfigFile,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and loaded settings.
    #[must_use]
    pub fn new(flags: &OutputFlags, settings: DeploySettings) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let locator = match settings.search_path.as_deref() {
            Some(path) => PathLocator::with_search_path(path),
            None => PathLocator::from_env(),
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            runner: TokioCommandRunner::new(settings.probe_timeout()),
            locator,
            config_file: LocalConfigFile,
            settings,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }
}
