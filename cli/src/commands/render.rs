//! `vault-deploy render`: print the rendered configuration.

use std::process::ExitCode;

use anyhow::Result;
use vault_config::RenderedConfig;

use crate::application::services::config_apply;
use crate::commands::RenderArgs;
use crate::infra::params::load_params;

/// Run the render command.
///
/// The document goes to stdout as-is, `--json` or not: it already is JSON.
pub fn run(args: &RenderArgs) -> Result<ExitCode> {
    let rendered = render_from_args(args)?;
    print!("{}", rendered.as_str());
    Ok(ExitCode::SUCCESS)
}

/// Load the params file, apply `--mode`, and render.
///
/// # Errors
///
/// Returns an error if the params file cannot be loaded or fails validation.
pub fn render_from_args(args: &RenderArgs) -> Result<RenderedConfig> {
    let mut cfg = load_params(&args.params)?;
    if let Some(mode) = args.mode {
        cfg.mode = mode;
    }
    config_apply::render_config(&args.renderer(), &cfg)
}
