//! vault-deploy - Vault version fact and configuration rendering

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vault_config::ConfigValidationError;
use vault_deploy::cli::Cli;
use vault_deploy::output::json;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the rendered document or JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, json_mode);
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let code = if e.downcast_ref::<ConfigValidationError>().is_some() {
            "config_invalid"
        } else {
            "error"
        };
        if let Ok(text) = json::format_error(&format!("{e:#}"), code) {
            println!("{text}");
            return;
        }
    }
    eprintln!("Error: {e:#}");
}
