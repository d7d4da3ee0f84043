//! Command implementations

pub mod apply;
pub mod check;
pub mod fact;
pub mod render;
pub mod version;

use std::path::PathBuf;

use clap::Args;
use vault_config::{Defaults, Mode, Renderer};

/// Arguments shared by every command that renders a configuration.
#[derive(Args)]
pub struct RenderArgs {
    /// Params file (YAML or JSON) describing the desired configuration
    #[arg(short, long)]
    pub params: PathBuf,

    /// Override the mode set in the params file
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Do not fill in the default storage and listener stanzas
    #[arg(long)]
    pub no_defaults: bool,
}

impl RenderArgs {
    /// Renderer matching `--no-defaults`.
    #[must_use]
    pub fn renderer(&self) -> Renderer {
        if self.no_defaults {
            Renderer::new(Defaults::none())
        } else {
            Renderer::default()
        }
    }
}
