//! Property-based tests for version parsing and configuration rendering.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use serde_json::json;
use vault_config::{ServiceConfig, render};
use vault_deploy::domain::version::{VersionTriple, parse_version_output};

// ============================================================================
// parse_version_output() property tests
// ============================================================================

proptest! {
    /// Any banner embedded in surrounding text yields exactly its triple.
    #[test]
    fn prop_banner_version_extracted(
        major in 0u64..1000,
        minor in 0u64..1000,
        patch in 0u64..1000,
        prefix in "[a-z :\n]{0,20}",
        suffix in "[ ,(+\n][a-z0-9 ]{0,16}",
    ) {
        let out = format!("{prefix}Vault v{major}.{minor}.{patch}{suffix}");
        let expected = format!("{major}.{minor}.{patch}");
        let parsed = parse_version_output(&out);
        prop_assert_eq!(parsed, Some(expected));
    }

    /// Output without the literal banner never yields a version.
    #[test]
    fn prop_no_banner_no_version(out in "[a-zA-Z0-9 .\n]{0,60}") {
        prop_assume!(!out.contains("Vault v"));
        prop_assert_eq!(parse_version_output(&out), None);
    }

    /// Parsed versions always round-trip through the strict triple parser.
    #[test]
    fn prop_parsed_version_is_strict_triple(
        major in 0u64..100_000,
        minor in 0u64..100_000,
        patch in 0u64..100_000,
    ) {
        let parsed = parse_version_output(&format!("Vault v{major}.{minor}.{patch} (x)"))
            .expect("banner matches");
        let triple: VersionTriple = parsed.parse().expect("strict triple");
        prop_assert_eq!(triple, VersionTriple::new(major, minor, patch));
    }
}

// ============================================================================
// render() property tests
// ============================================================================

proptest! {
    /// Rendering the same input twice gives identical bytes.
    #[test]
    fn prop_render_is_deterministic(
        path in "/[a-z]{1,12}(/[a-z]{1,8}){0,3}",
        port in 1024u16..65535,
        ui in any::<bool>(),
    ) {
        let cfg: ServiceConfig = serde_json::from_value(json!({
            "storage": {"file": {"path": path}},
            "listener": {"tcp": {"address": format!("127.0.0.1:{port}"), "tls_disable": true}},
            "ui": ui,
        }))
        .expect("valid params");

        let first = render(&cfg).expect("renders");
        let second = render(&cfg).expect("renders");
        prop_assert_eq!(first.as_str(), second.as_str());
        prop_assert!(first.as_str().ends_with('\n'));

        let doc: serde_json::Value = serde_json::from_str(first.as_str()).expect("valid JSON");
        let address = format!("127.0.0.1:{port}");
        prop_assert_eq!(doc["storage"]["file"]["path"].as_str(), Some(path.as_str()));
        prop_assert_eq!(doc["listener"][0]["tcp"]["address"].as_str(), Some(address.as_str()));
    }

    /// Key order in the input never changes the output.
    #[test]
    fn prop_render_ignores_input_key_order(keys in prop::collection::btree_set("[a-z]{1,8}", 1..6)) {
        let forward: serde_json::Map<String, serde_json::Value> =
            keys.iter().map(|k| (k.clone(), json!(k.len()))).collect();
        let backward: serde_json::Map<String, serde_json::Value> =
            keys.iter().rev().map(|k| (k.clone(), json!(k.len()))).collect();

        let a: ServiceConfig = serde_json::from_value(json!({"extra_config": forward})).expect("valid");
        let b: ServiceConfig = serde_json::from_value(json!({"extra_config": backward})).expect("valid");
        let rendered_a = render(&a).expect("renders");
        let rendered_b = render(&b).expect("renders");
        prop_assert_eq!(rendered_a.as_str(), rendered_b.as_str());
    }
}
