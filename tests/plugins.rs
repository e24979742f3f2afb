//! Plugin lifecycle and capability discovery integration tests

use std::sync::Arc;

use prism_host::{
    Capability, Config, ConfigLicenseReader, ConfigNode, ImageSignatureProvider, LicenseProvider,
    Plugin,
};

fn host_config(toml: &str) -> Config {
    Config::from_toml_str(toml).unwrap()
}

#[test]
fn install_collects_licenses_from_config() {
    let config = host_config(
        r#"
        [licenses]
        license = ["ABCD-1234", """
        EFGH
        5678
        """]
        "#,
    );

    let reader = Arc::new(ConfigLicenseReader::new());
    Arc::clone(&reader).install(&config);

    assert_eq!(reader.licenses(), vec!["ABCD-1234", "EFGH5678"]);
    // the host sees the same list through the registry aggregator
    assert_eq!(config.plugins().licenses(), vec!["ABCD-1234", "EFGH5678"]);
}

#[test]
fn install_without_licenses_node_still_registers() {
    let config = host_config("[pipeline]\nthreads = 4\n");

    let reader = Arc::new(ConfigLicenseReader::new());
    Arc::clone(&reader).install(&config);

    assert!(reader.licenses().is_empty());
    assert_eq!(config.plugins().len(), 1);
    assert!(config.plugins().get("license-reader").is_some());
}

#[test]
fn licenses_are_a_stable_snapshot() {
    let config = host_config("[licenses]\nlicense = [\"AB CD\", \"12\t34\"]\n");

    let reader = Arc::new(ConfigLicenseReader::new());
    Arc::clone(&reader).install(&config);

    let first = reader.licenses();
    assert_eq!(first, vec!["ABCD", "1234"]);
    assert_eq!(reader.licenses(), first);
    assert_eq!(reader.licenses(), first);
}

#[test]
fn install_is_fluent_and_idempotent_safe() {
    let config = host_config("[licenses]\nlicense = [\"KEY\"]\n");

    let reader = Arc::new(ConfigLicenseReader::new());
    let installed = Arc::clone(&reader).install(&config);
    assert_eq!(installed.id(), "license-reader");

    // a second install re-scans but the registry rejects the duplicate
    Arc::clone(&reader).install(&config);
    assert_eq!(config.plugins().len(), 1);
    assert_eq!(reader.licenses(), vec!["KEY", "KEY"]);
}

#[test]
fn uninstall_reports_whether_registered() {
    let config = Config::default();
    let reader = Arc::new(ConfigLicenseReader::new());

    // never installed: the normal not-found case
    assert!(!reader.uninstall(&config));

    Arc::clone(&reader).install(&config);
    assert!(reader.uninstall(&config));
    assert!(config.plugins().is_empty());
    assert!(!reader.uninstall(&config));
}

#[test]
fn reinstall_after_uninstall_appends() {
    let config = host_config("[licenses]\nlicense = [\"KEY\"]\n");

    let reader = Arc::new(ConfigLicenseReader::new());
    Arc::clone(&reader).install(&config);
    assert!(reader.uninstall(&config));
    Arc::clone(&reader).install(&config);

    // the backing store is append-only across installs
    assert_eq!(reader.licenses(), vec!["KEY", "KEY"]);
    assert_eq!(config.plugins().len(), 1);
}

#[test]
fn capability_queries_return_tagged_plugins() {
    let config = host_config("[licenses]\nlicense = [\"KEY\"]\n");

    Arc::new(ConfigLicenseReader::new()).install(&config);
    Arc::new(ImageSignatureProvider::new()).install(&config);

    let by_licenses = config.plugins().with_capability(Capability::Licenses);
    assert_eq!(by_licenses.len(), 1);
    assert_eq!(by_licenses[0].id(), "license-reader");

    let by_signatures = config.plugins().with_capability(Capability::Signatures);
    assert_eq!(by_signatures.len(), 1);
    assert_eq!(by_signatures[0].id(), "image-signatures");

    assert_eq!(config.plugins().license_providers().len(), 1);
    assert_eq!(config.plugins().signature_providers().len(), 1);
}

#[test]
fn registry_aggregates_signatures_across_providers() {
    let config = Config::default();
    Arc::new(ImageSignatureProvider::new()).install(&config);

    let signatures = config.plugins().signatures();
    assert!(!signatures.is_empty());

    let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    assert!(signatures.iter().any(|s| s.matches(&jpeg)));
    assert!(!signatures.iter().any(|s| s.matches(b"plain text")));
}

#[test]
fn plugin_list_exposes_ids_and_capabilities() {
    let config = Config::default();
    Arc::new(ConfigLicenseReader::new()).install(&config);
    Arc::new(ImageSignatureProvider::new()).install(&config);

    let infos = config.plugins().list();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].id, "license-reader");
    assert_eq!(infos[0].capabilities, vec![Capability::Licenses]);
    assert_eq!(infos[1].id, "image-signatures");
    assert_eq!(infos[1].capabilities, vec![Capability::Signatures]);
}

#[test]
fn json_config_with_null_license_entries() {
    let config = Config::from_json_str(
        r#"{"licenses": {"license": ["AB CD", null, "12\t34"]}}"#,
    )
    .unwrap();

    let reader = Arc::new(ConfigLicenseReader::new());
    Arc::clone(&reader).install(&config);

    // the null entry contributes nothing and does not shift order
    assert_eq!(reader.licenses(), vec!["ABCD", "1234"]);
}

#[test]
fn hand_built_tree_matches_loaded_tree() {
    let tree = ConfigNode::new("config").with_child(
        ConfigNode::new("licenses")
            .with_child(ConfigNode::new("license").with_text("ABCD-1234"))
            .with_child(ConfigNode::new("license").with_text(" EFGH\n            5678 ")),
    );
    let config = Config::new(tree);

    let reader = Arc::new(ConfigLicenseReader::new());
    Arc::clone(&reader).install(&config);

    assert_eq!(reader.licenses(), vec!["ABCD-1234", "EFGH5678"]);
}
