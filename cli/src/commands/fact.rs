//! `vault-deploy fact`: report the installed Vault version.

use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::services::version_probe;
use crate::output::json;

#[derive(Serialize)]
struct VersionFact<'a> {
    vault_version: Option<&'a str>,
}

/// Run the fact command. Always succeeds: "not installed" prints nothing
/// (or `null` under `--json`).
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let info = version_probe::probe(&app.locator, &app.runner, &app.settings.binary).await;

    if app.is_json() {
        let fact = VersionFact {
            vault_version: info.version.as_deref(),
        };
        println!("{}", json::format_value(&fact)?);
    } else if let Some(version) = &info.version {
        println!("{version}");
    }
    Ok(ExitCode::SUCCESS)
}
