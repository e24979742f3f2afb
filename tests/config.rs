//! Configuration loading integration tests

use prism_host::{Config, ConfigNode, Error};

#[test]
fn load_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.toml");
    std::fs::write(
        &path,
        r#"
        [licenses]
        license = ["ABCD-1234"]

        [pipeline]
        threads = 4
        "#,
    )
    .unwrap();

    let config = Config::from_toml_file(&path).unwrap();

    let licenses = config.get_node("licenses").unwrap();
    assert_eq!(licenses.children_by_name("license").count(), 1);
    assert_eq!(
        config.get_node("threads").unwrap().text_contents(),
        Some("4")
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_toml_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn malformed_file_is_a_toml_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.toml");
    std::fs::write(&path, "licenses = [").unwrap();

    let result = Config::from_toml_file(&path);
    assert!(matches!(result, Err(Error::Toml(_))));
}

#[test]
fn nested_sections_are_reachable_by_name() {
    let config = Config::from_toml_str(
        r#"
        [pipeline.output.licenses]
        license = ["DEEP-0001"]
        "#,
    )
    .unwrap();

    // get_node searches the whole tree, not just top-level sections
    let licenses = config.get_node("licenses").unwrap();
    let texts: Vec<_> = licenses
        .children_by_name("license")
        .filter_map(ConfigNode::text_contents)
        .collect();
    assert_eq!(texts, vec!["DEEP-0001"]);
}
