//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags, OutputMode};
use crate::commands;
use crate::infra::config::{load_probe_settings, load_settings};

/// Install-time helper for HashiCorp Vault: version fact and config rendering
#[derive(Parser)]
#[command(
    name = "vault-deploy",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also disabled when NO_COLOR is set)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the installed Vault version, if any
    Fact,

    /// Render the Vault configuration to stdout
    Render(commands::RenderArgs),

    /// Render the Vault configuration and write it if it changed
    Apply(commands::apply::ApplyArgs),

    /// Report whether Vault needs installing to reach a version
    Check(commands::check::CheckArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if settings are invalid or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;

        if let Command::Version = command {
            commands::version::run(if json {
                OutputMode::Json
            } else {
                OutputMode::Human
            });
            return Ok(ExitCode::SUCCESS);
        }

        // Rendering reads no settings.
        if let Command::Render(args) = &command {
            return commands::render::run(args);
        }

        let settings = match command {
            Command::Fact | Command::Check(_) => load_probe_settings(),
            _ => load_settings()?,
        };
        let app = AppContext::new(
            &OutputFlags {
                no_color,
                quiet,
                json,
            },
            settings,
        );

        match command {
            Command::Fact => commands::fact::run(&app).await,
            Command::Apply(args) => commands::apply::run(&app, &args),
            Command::Check(args) => commands::check::run(&app, &args).await,
            Command::Version | Command::Render(_) => Ok(ExitCode::SUCCESS),
        }
    }
}
