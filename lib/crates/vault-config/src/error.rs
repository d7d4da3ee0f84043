use thiserror::Error;

use crate::schema::Mode;

/// Reasons a configuration cannot be rendered.
///
/// Every variant names the stanza or field at fault so the operator can fix
/// the params file without reading the rendered output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("missing required stanza '{stanza}' for {mode} mode")]
    MissingStanza { stanza: &'static str, mode: Mode },

    #[error("stanza '{stanza}' must name exactly one backend, found: {kinds}")]
    AmbiguousBackend { stanza: &'static str, kinds: String },

    #[error("entry {index} of '{stanza}' must be a single listener type mapped to its options")]
    MalformedListener { stanza: &'static str, index: usize },

    #[error("field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("cannot serialize '{stanza}': {reason}")]
    Unserializable { stanza: &'static str, reason: String },
}
