//! `vault-deploy apply`: render and write the configuration file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::config_apply::apply_config;
use crate::commands::RenderArgs;
use crate::commands::render::render_from_args;
use crate::output::{SilentReporter, TerminalReporter, json};

/// Arguments for the apply command.
#[derive(Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Destination file (default: VAULT_DEPLOY_CONFIG_PATH or /etc/vault/config.json)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Run the apply command.
pub fn run(app: &AppContext, args: &ApplyArgs) -> Result<ExitCode> {
    let rendered = render_from_args(&args.render)?;
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| app.settings.config_path.clone());
    let mode = app.settings.mode_bits()?;

    if app.is_json() {
        let outcome = apply_config(&app.config_file, &SilentReporter, &rendered, &path, mode)?;
        println!("{}", json::format_value(&outcome)?);
    } else {
        let reporter = TerminalReporter::new(&app.output);
        apply_config(&app.config_file, &reporter, &rendered, &path, mode)?;
    }
    Ok(ExitCode::SUCCESS)
}
