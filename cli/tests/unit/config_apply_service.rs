//! Unit tests for rendering and applying the configuration file.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use serde_json::json;
use vault_config::{ConfigValidationError, Defaults, Renderer, ServiceConfig};
use vault_deploy::application::services::config_apply::{apply_config, render_config};
use vault_deploy::domain::apply::{ApplyOutcome, sha256_hex};

use crate::mocks::{MemoryStore, RecordingReporter, UnreadableStore};

const PATH: &str = "/etc/vault/config.json";

fn config(value: serde_json::Value) -> ServiceConfig {
    serde_json::from_value(value).expect("valid params")
}

#[test]
fn test_render_config_with_builtin_defaults() {
    let rendered = render_config(&Renderer::default(), &ServiceConfig::default()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(rendered.as_str()).unwrap();
    assert_eq!(doc["storage"]["file"]["path"], "/var/lib/vault");
    assert_eq!(doc["listener"][0]["tcp"]["address"], "127.0.0.1:8200");
}

#[test]
fn test_render_config_error_is_downcastable() {
    let err = render_config(
        &Renderer::new(Defaults::none()),
        &ServiceConfig::default(),
    )
    .unwrap_err();
    let validation = err
        .downcast_ref::<ConfigValidationError>()
        .expect("validation error");
    assert!(validation.to_string().contains("storage"), "got: {validation}");
}

#[test]
fn test_render_config_reports_ignored_stanzas() {
    let cfg = config(json!({
        "storage": {"file": {"path": "/tmp"}},
        "agent_cache": {"use_auto_auth_token": true}
    }));
    let rendered = render_config(&Renderer::default(), &cfg).unwrap();
    assert!(!rendered.as_str().contains("use_auto_auth_token"));
    assert!(!rendered.ignored().is_empty());
}

#[test]
fn test_apply_creates_missing_file() {
    let store = MemoryStore::default();
    let reporter = RecordingReporter::default();
    let rendered = render_config(&Renderer::default(), &ServiceConfig::default()).unwrap();

    let outcome = apply_config(&store, &reporter, &rendered, Path::new(PATH), 0o640).unwrap();

    assert!(outcome.changed());
    assert!(matches!(
        outcome,
        ApplyOutcome::Written {
            previous_digest: None,
            ..
        }
    ));
    assert_eq!(store.contents(PATH).unwrap(), rendered.as_bytes());
    assert_eq!(store.mode(PATH), Some(0o640));
    assert!(
        reporter
            .messages()
            .iter()
            .any(|m| m.starts_with("success: wrote"))
    );
}

#[test]
fn test_apply_twice_writes_once() {
    let store = MemoryStore::default();
    let reporter = RecordingReporter::default();
    let cfg = config(json!({"storage": {"file": {"path": "/tmp"}}}));

    let first = render_config(&Renderer::default(), &cfg).unwrap();
    let outcome = apply_config(&store, &reporter, &first, Path::new(PATH), 0o640).unwrap();
    assert!(outcome.changed());

    let second = render_config(&Renderer::default(), &cfg).unwrap();
    let outcome = apply_config(&store, &reporter, &second, Path::new(PATH), 0o640).unwrap();
    assert!(!outcome.changed());
    assert_eq!(outcome.digest(), sha256_hex(first.as_bytes()));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn test_apply_replaces_different_file() {
    let store = MemoryStore::with_file(PATH, b"{}\n");
    let reporter = RecordingReporter::default();
    let rendered = render_config(&Renderer::default(), &ServiceConfig::default()).unwrap();

    let outcome = apply_config(&store, &reporter, &rendered, Path::new(PATH), 0o600).unwrap();

    match outcome {
        ApplyOutcome::Written {
            previous_digest, ..
        } => assert_eq!(previous_digest, Some(sha256_hex(b"{}\n"))),
        ApplyOutcome::Unchanged { .. } => panic!("expected a write"),
    }
    assert_eq!(store.contents(PATH).unwrap(), rendered.as_bytes());
}

#[test]
fn test_apply_read_failure_propagates() {
    let reporter = RecordingReporter::default();
    let rendered = render_config(&Renderer::default(), &ServiceConfig::default()).unwrap();

    let err = apply_config(&UnreadableStore, &reporter, &rendered, Path::new(PATH), 0o640)
        .unwrap_err();

    let msg = format!("{err:#}");
    assert!(msg.contains("cannot read /etc/vault/config.json"), "got: {msg}");
    assert!(msg.contains("permission denied"), "got: {msg}");
}
