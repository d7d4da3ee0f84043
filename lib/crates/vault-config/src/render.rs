//! Deterministic JSON rendering of a [`ServiceConfig`].
//!
//! The same input always yields the same bytes: object keys are written in
//! sorted order at every depth, independent of how the input maps were built,
//! and the document ends with a single newline.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::defaults::Defaults;
use crate::error::ConfigValidationError;
use crate::merge::{merge_backend, merge_listeners, merge_stanza, strip_nulls, without_nulls};
use crate::schema::{Mode, ServiceConfig, Stanza};

/// Bytes ready to be written to Vault's configuration path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    text: String,
    ignored: Vec<&'static str>,
}

impl RenderedConfig {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }

    /// Settings the caller supplied that belong to the other mode and were
    /// left out of the document.
    #[must_use]
    pub fn ignored(&self) -> &[&'static str] {
        &self.ignored
    }
}

/// Renders configurations against a fixed set of [`Defaults`].
#[derive(Debug, Clone)]
pub struct Renderer {
    defaults: Defaults,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Defaults::builtin())
    }
}

/// Render with the built-in defaults.
pub fn render(cfg: &ServiceConfig) -> Result<RenderedConfig, ConfigValidationError> {
    Renderer::default().render(cfg)
}

impl Renderer {
    #[must_use]
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// Validate `cfg`, merge it over the defaults and serialize it.
    pub fn render(&self, cfg: &ServiceConfig) -> Result<RenderedConfig, ConfigValidationError> {
        let (mut document, ignored) = match cfg.mode {
            Mode::Server => (self.server_document(cfg)?, agent_settings_present(cfg)),
            Mode::Agent => (agent_document(cfg)?, server_settings_present(cfg)),
        };
        merge_stanza(&mut document, cfg.extra_config.clone());

        let mut document = Value::Object(document);
        strip_nulls(&mut document);
        require_after_merge(&document, cfg.mode)?;

        let mut text = serde_json::to_string_pretty(&Sorted(&document)).map_err(|e| {
            ConfigValidationError::Unserializable {
                stanza: "document",
                reason: e.to_string(),
            }
        })?;
        text.push('\n');
        Ok(RenderedConfig { text, ignored })
    }

    fn server_document(&self, cfg: &ServiceConfig) -> Result<Stanza, ConfigValidationError> {
        let storage = merge_backend(self.defaults.storage.as_ref(), cfg.storage.clone())
            .map(|s| without_nulls(&s))
            .filter(|s| !s.is_empty())
            .ok_or(ConfigValidationError::MissingStanza {
                stanza: "storage",
                mode: Mode::Server,
            })?;
        require_single_backend("storage", &storage)?;

        let listener: Vec<Stanza> = merge_listeners(&self.defaults.listener, &cfg.listener)
            .iter()
            .map(without_nulls)
            .collect();
        if listener.is_empty() {
            return Err(ConfigValidationError::MissingStanza {
                stanza: "listener",
                mode: Mode::Server,
            });
        }
        validate_listeners("listener", &listener)?;

        let mut doc = Stanza::new();
        doc.insert("storage".into(), Value::Object(storage));
        doc.insert("listener".into(), listener_array(listener));

        if let Some(ha_storage) = non_empty(cfg.ha_storage.as_ref()) {
            require_single_backend("ha_storage", &ha_storage)?;
            doc.insert("ha_storage".into(), Value::Object(ha_storage));
        }
        if let Some(seal) = non_empty(cfg.seal.as_ref()) {
            doc.insert("seal".into(), Value::Object(seal));
        }
        if let Some(telemetry) = non_empty(cfg.telemetry.as_ref()) {
            doc.insert("telemetry".into(), Value::Object(telemetry));
        }

        insert_str(&mut doc, "api_addr", cfg.api_addr.as_deref());
        insert_str(&mut doc, "cluster_addr", cfg.cluster_addr.as_deref());
        insert_str(&mut doc, "default_lease_ttl", cfg.default_lease_ttl.as_deref());
        insert_str(&mut doc, "max_lease_ttl", cfg.max_lease_ttl.as_deref());
        if let Some(ui) = cfg.ui {
            doc.insert("ui".into(), Value::Bool(ui));
        }
        if let Some(disable_mlock) = cfg.disable_mlock {
            doc.insert("disable_mlock".into(), Value::Bool(disable_mlock));
        }
        Ok(doc)
    }
}

fn agent_document(cfg: &ServiceConfig) -> Result<Stanza, ConfigValidationError> {
    let vault = cfg
        .agent_vault
        .as_ref()
        .filter(|v| v.address.as_deref().is_some_and(|a| !a.trim().is_empty()))
        .ok_or(ConfigValidationError::MissingStanza {
            stanza: "vault.address",
            mode: Mode::Agent,
        })?;
    let auto_auth = cfg
        .agent_auto_auth
        .as_ref()
        .filter(|a| !a.method.is_empty())
        .ok_or(ConfigValidationError::MissingStanza {
            stanza: "auto_auth.method",
            mode: Mode::Agent,
        })?;
    for (index, method) in auto_auth.method.iter().enumerate() {
        if method.kind.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField {
                field: format!("auto_auth.method[{index}].type"),
            });
        }
    }

    let mut doc = Stanza::new();
    doc.insert("vault".into(), to_value("vault", vault)?);
    doc.insert("auto_auth".into(), to_value("auto_auth", auto_auth)?);

    if let Some(cache) = non_empty(cfg.agent_cache.as_ref()) {
        doc.insert("cache".into(), Value::Object(cache));
    }
    if !cfg.agent_listeners.is_empty() {
        let listeners: Vec<Stanza> = cfg.agent_listeners.iter().map(without_nulls).collect();
        validate_listeners("agent_listeners", &listeners)?;
        doc.insert("listener".into(), listener_array(listeners));
    }
    if !cfg.agent_template.is_empty() {
        let templates = cfg.agent_template.iter().cloned().map(Value::Object).collect();
        doc.insert("template".into(), Value::Array(templates));
    }
    Ok(doc)
}

fn require_single_backend(stanza: &'static str, backend: &Stanza) -> Result<(), ConfigValidationError> {
    if backend.len() == 1 {
        return Ok(());
    }
    Err(ConfigValidationError::AmbiguousBackend {
        stanza,
        kinds: backend.keys().cloned().collect::<Vec<_>>().join(", "),
    })
}

fn validate_listeners(stanza: &'static str, listeners: &[Stanza]) -> Result<(), ConfigValidationError> {
    for (index, listener) in listeners.iter().enumerate() {
        let well_formed = listener.len() == 1 && listener.values().all(Value::is_object);
        if !well_formed {
            return Err(ConfigValidationError::MalformedListener { stanza, index });
        }
    }
    Ok(())
}

fn listener_array(listeners: Vec<Stanza>) -> Value {
    Value::Array(listeners.into_iter().map(Value::Object).collect())
}

/// The stanza without `null` values, or `None` if nothing is left.
fn non_empty(stanza: Option<&Stanza>) -> Option<Stanza> {
    stanza.map(without_nulls).filter(|s| !s.is_empty())
}

/// Required stanzas must survive `extra_config` and null stripping.
fn require_after_merge(document: &Value, mode: Mode) -> Result<(), ConfigValidationError> {
    let required: &[&'static str] = match mode {
        Mode::Server => &["storage", "listener"],
        Mode::Agent => &["vault", "auto_auth"],
    };
    for &stanza in required {
        let present = match document.get(stanza) {
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
            None => false,
        };
        if !present {
            return Err(ConfigValidationError::MissingStanza { stanza, mode });
        }
    }
    Ok(())
}

fn insert_str(doc: &mut Stanza, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        doc.insert(key.to_owned(), Value::String(value.to_owned()));
    }
}

fn to_value<T: Serialize>(stanza: &'static str, value: &T) -> Result<Value, ConfigValidationError> {
    serde_json::to_value(value).map_err(|e| ConfigValidationError::Unserializable {
        stanza,
        reason: e.to_string(),
    })
}

fn server_settings_present(cfg: &ServiceConfig) -> Vec<&'static str> {
    [
        ("storage", cfg.storage.is_some()),
        ("ha_storage", cfg.ha_storage.is_some()),
        ("listener", !cfg.listener.is_empty()),
        ("seal", cfg.seal.is_some()),
        ("telemetry", cfg.telemetry.is_some()),
        ("api_addr", cfg.api_addr.is_some()),
        ("cluster_addr", cfg.cluster_addr.is_some()),
        ("ui", cfg.ui.is_some()),
        ("disable_mlock", cfg.disable_mlock.is_some()),
        ("default_lease_ttl", cfg.default_lease_ttl.is_some()),
        ("max_lease_ttl", cfg.max_lease_ttl.is_some()),
    ]
    .into_iter()
    .filter_map(|(name, set)| set.then_some(name))
    .collect()
}

fn agent_settings_present(cfg: &ServiceConfig) -> Vec<&'static str> {
    [
        ("agent_vault", cfg.agent_vault.is_some()),
        ("agent_auto_auth", cfg.agent_auto_auth.is_some()),
        ("agent_cache", cfg.agent_cache.is_some()),
        ("agent_listeners", !cfg.agent_listeners.is_empty()),
        ("agent_template", !cfg.agent_template.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, set)| set.then_some(name))
    .collect()
}

/// Serializes a JSON value with object keys in sorted order.
struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(key, &Sorted(value))?;
                }
                out.end()
            }
            Value::Array(items) => serializer.collect_seq(items.iter().map(Sorted)),
            scalar => scalar.serialize(serializer),
        }
    }
}
