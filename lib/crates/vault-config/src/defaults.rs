use serde_json::{Value, json};

use crate::schema::Stanza;

/// Values the renderer falls back to when the caller leaves a server stanza
/// unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    pub storage: Option<Stanza>,
    pub listener: Vec<Stanza>,
}

impl Defaults {
    /// File storage under `/var/lib/vault`, one plaintext TCP listener on
    /// loopback port 8200.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            storage: Some(object(json!({ "file": { "path": "/var/lib/vault" } }))),
            listener: vec![object(json!({
                "tcp": { "address": "127.0.0.1:8200", "tls_disable": true }
            }))],
        }
    }

    /// No fallbacks: every required server stanza must come from the caller.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

fn object(value: Value) -> Stanza {
    match value {
        Value::Object(map) => map,
        _ => Stanza::new(),
    }
}
