//! Vault configuration schema and renderer.
//!
//! Pure data in, bytes out: nothing in this crate touches the filesystem or
//! spawns processes. Writing the rendered document is the caller's job.

pub mod defaults;
pub mod error;
pub mod merge;
pub mod render;
pub mod schema;

pub use defaults::Defaults;
pub use error::ConfigValidationError;
pub use render::{RenderedConfig, Renderer, render};
pub use schema::{AgentVault, AuthMethod, AutoAuth, Mode, ServiceConfig, Stanza};
