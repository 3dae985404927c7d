//! Tests for the format-agnostic ConfigStore

use droid_fs::{ConfigStore, Error, NormalizedPath};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sample {
    application_id: String,
    min_sdk: u32,
}

#[rstest]
#[case("build.toml", "applicationId = \"com.example.app\"\nminSdk = 21\n")]
#[case("build.json", r#"{"applicationId": "com.example.app", "minSdk": 21}"#)]
#[case("build.yaml", "applicationId: com.example.app\nminSdk: 21\n")]
#[case("build.yml", "applicationId: com.example.app\nminSdk: 21\n")]
fn load_detects_format_from_extension(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(name), content).unwrap();

    let store = ConfigStore::new();
    let loaded: Sample = store
        .load(&NormalizedPath::new(temp.path().join(name)))
        .unwrap();

    assert_eq!(
        loaded,
        Sample {
            application_id: "com.example.app".into(),
            min_sdk: 21,
        }
    );
}

#[test]
fn load_rejects_unknown_extension() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("build.gradle"), "android {}").unwrap();

    let result: Result<Sample, _> =
        ConfigStore::new().load(&NormalizedPath::new(temp.path().join("build.gradle")));

    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "gradle"));
}

#[test]
fn parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("build.toml"), "minSdk = [").unwrap();

    let result: Result<Sample, _> =
        ConfigStore::new().load(&NormalizedPath::new(temp.path().join("build.toml")));

    let err = result.unwrap_err();
    assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "TOML"));
    assert!(err.to_string().contains("build.toml"));
}
