use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A free-form configuration section, keyed the way Vault names it.
pub type Stanza = serde_json::Map<String, serde_json::Value>;

/// Which Vault process the configuration is for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Mode {
    #[default]
    Server,
    Agent,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server => f.write_str("server"),
            Self::Agent => f.write_str("agent"),
        }
    }
}

/// Desired Vault configuration, as supplied by the operator.
///
/// Server-mode settings and `agent_*` settings live side by side; only the
/// set selected by [`Mode`] reaches the rendered document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub mode: Mode,

    // ── server ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Stanza>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_storage: Option<Stanza>,
    /// Accepts a single listener map or a list of them.
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub listener: Vec<Stanza>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seal: Option<Stanza>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<Stanza>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_mlock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lease_ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lease_ttl: Option<String>,

    // ── agent ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_vault: Option<AgentVault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_auto_auth: Option<AutoAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_cache: Option<Stanza>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub agent_listeners: Vec<Stanza>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub agent_template: Vec<Stanza>,

    /// Merged into the top level of the document last, field by field.
    #[serde(skip_serializing_if = "Stanza::is_empty")]
    pub extra_config: Stanza,
}

/// Upstream server the agent talks to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentVault {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// TLS and retry options, passed through untouched.
    #[serde(flatten)]
    pub options: Stanza,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoAuth {
    #[serde(default)]
    pub method: Vec<AuthMethod>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sink: Vec<Stanza>,
}

/// One `auto_auth.method` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthMethod {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_ttl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Stanza::is_empty")]
    pub config: Stanza,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Stanza),
    Many(Vec<Stanza>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Stanza>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(stanza) => vec![stanza],
        OneOrMany::Many(stanzas) => stanzas,
    })
}
