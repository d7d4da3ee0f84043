//! `vault-deploy check`: compare the installed version with a wanted one.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::install_check::check_install;
use crate::domain::version::RequestedVersion;
use crate::output::json;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Wanted version, e.g. 1.19.2, or `present` for any
    #[arg(value_name = "VERSION")]
    pub requested: RequestedVersion,
}

/// Run the check command.
pub async fn run(app: &AppContext, args: &CheckArgs) -> Result<ExitCode> {
    let check = check_install(
        &app.locator,
        &app.runner,
        &app.settings.binary,
        &args.requested,
    )
    .await;

    if app.is_json() {
        println!("{}", json::format_value(&check)?);
        return Ok(ExitCode::SUCCESS);
    }

    let out = &app.output;
    out.kv(
        "Installed:",
        check.installed.version.as_deref().unwrap_or("none"),
    );
    if let Some(path) = &check.installed.path {
        out.kv("Path:     ", &path.display().to_string());
    }
    out.kv("Requested:", &check.requested);
    if check.install_required {
        out.warn("install required");
    } else {
        out.success("installed version satisfies request");
    }
    Ok(ExitCode::SUCCESS)
}
