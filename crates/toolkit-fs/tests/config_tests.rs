use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use toolkit_fs::{ConfigStore, NormalizedPath};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct TestConfig {
    #[serde(default)]
    version: String,
    #[serde(default)]
    editors: BTreeMap<String, bool>,
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("ai-toolkit.yaml");
    fs::write(&file_path, "version: \"1.0\"\neditors:\n  cursor: true\n  kiro: false\n").unwrap();

    let config: TestConfig = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(config.version, "1.0");
    assert_eq!(config.editors.get("cursor"), Some(&true));
    assert_eq!(config.editors.get("kiro"), Some(&false));
}

#[test]
fn test_load_empty_yaml_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("ai-toolkit.yml");
    fs::write(&file_path, "").unwrap();

    let config: TestConfig = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(config, TestConfig::default());
}

#[test]
fn test_load_toml_and_json() {
    let temp = TempDir::new().unwrap();
    let toml_path = temp.path().join("config.toml");
    let json_path = temp.path().join("config.json");
    fs::write(&toml_path, "version = \"2\"").unwrap();
    fs::write(&json_path, r#"{"version": "3"}"#).unwrap();

    let store = ConfigStore::new();
    let from_toml: TestConfig = store.load(&NormalizedPath::new(&toml_path)).unwrap();
    let from_json: TestConfig = store.load(&NormalizedPath::new(&json_path)).unwrap();

    assert_eq!(from_toml.version, "2");
    assert_eq!(from_json.version, "3");
}

#[test]
fn test_malformed_yaml_reports_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("ai-toolkit.yaml");
    fs::write(&file_path, "editors: [unclosed").unwrap();

    let result: toolkit_fs::Result<TestConfig> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    let message = result.unwrap_err().to_string();
    assert!(message.contains("YAML"), "got: {message}");
    assert!(message.contains("ai-toolkit.yaml"), "got: {message}");
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.xyz");
    fs::write(&file_path, "data").unwrap();

    let result: toolkit_fs::Result<TestConfig> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    assert!(result.is_err());
}

#[test]
fn test_save_then_load_yaml() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("ai-toolkit.yaml"));
    let mut original = TestConfig {
        version: "1.0".into(),
        ..Default::default()
    };
    original.editors.insert("claude".into(), true);

    let store = ConfigStore::new();
    store.save(&path, &original).unwrap();
    let loaded: TestConfig = store.load(&path).unwrap();

    assert_eq!(original, loaded);
}
