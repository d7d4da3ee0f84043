//! Argument parsing, help and version output.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::vault_deploy;

#[test]
fn test_cli_no_args_shows_help() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    vault_deploy().assert().code(2).stderr(predicate::str::contains(
        "Install-time helper for HashiCorp Vault",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    vault_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("fact"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    vault_deploy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault-deploy"));
}

#[test]
fn test_version_command_shows_version() {
    vault_deploy()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault-deploy 0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = vault_deploy()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["version"], "0.1.0");
}

#[test]
fn test_unknown_command_fails() {
    vault_deploy().arg("frobnicate").assert().code(2);
}

#[test]
fn test_invalid_settings_fail_apply_before_running() {
    vault_deploy()
        .env("VAULT_DEPLOY_PROBE_TIMEOUT_SECS", "soon")
        .args(["apply", "--params", "/nonexistent/params.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("VAULT_DEPLOY_"));
}

#[test]
fn test_fact_ignores_unrelated_bad_settings() {
    vault_deploy()
        .env("VAULT_DEPLOY_CONFIG_MODE", "rw")
        .env("VAULT_DEPLOY_SEARCH_PATH", "/nonexistent")
        .arg("fact")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_fact_survives_unparsable_timeout() {
    vault_deploy()
        .env("VAULT_DEPLOY_PROBE_TIMEOUT_SECS", "soon")
        .arg("fact")
        .assert()
        .success();
}

#[test]
fn test_no_color_env_accepts_conventional_value() {
    let output = vault_deploy()
        .env("NO_COLOR", "1")
        .env("VAULT_DEPLOY_SEARCH_PATH", "/nonexistent")
        .args(["fact", "--json"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["vault_version"], serde_json::Value::Null);
}

#[test]
fn test_render_ignores_bad_config_mode() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let params = dir.path().join("params.yml");
    std::fs::write(&params, "").expect("write params");

    vault_deploy()
        .env("VAULT_DEPLOY_CONFIG_MODE", "rw")
        .args(["render", "--params"])
        .arg(&params)
        .assert()
        .success();
}

#[test]
fn test_check_rejects_bad_version() {
    vault_deploy()
        .args(["check", "one.two"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("one.two"));
}
