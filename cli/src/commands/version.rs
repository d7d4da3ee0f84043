//! Version command

use crate::app::OutputMode;

/// Run the version command.
pub fn run(mode: OutputMode) {
    let version = env!("CARGO_PKG_VERSION");

    match mode {
        OutputMode::Json => println!(r#"{{"version":"{version}"}}"#),
        OutputMode::Human => println!("vault-deploy {version}"),
    }
}
