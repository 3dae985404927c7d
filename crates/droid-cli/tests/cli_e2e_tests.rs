//! End-to-end tests that invoke the compiled `droid` binary.

use assert_cmd::Command;
use droid_test_utils::{TestProject, WF3_DESCRIPTOR};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// A `droid` command isolated from the user's global defaults.
fn droid(global: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_droid"));
    cmd.env("DROID_CONFIG_DIR", global.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let global = TempDir::new().unwrap();
    droid(&global)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_no_command_shows_help_hint() {
    let global = TempDir::new().unwrap();
    droid(&global)
        .assert()
        .success()
        .stdout(predicate::str::contains("droid --help"));
}

#[test]
fn test_keys_lists_injection_keys() {
    let global = TempDir::new().unwrap();
    droid(&global)
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("flutter.minSdkVersion"))
        .stdout(predicate::str::contains("flutter.versionName"));
}

#[test]
fn test_keys_json() {
    let global = TempDir::new().unwrap();
    let out = droid(&global).args(["keys", "--json"]).output().unwrap();

    assert!(out.status.success());
    let keys: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(keys.as_array().map(Vec::len), Some(6));
    assert_eq!(keys[0]["key"], "flutter.compileSdkVersion");
}

#[test]
fn test_resolve_wf3_json() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    let out = droid(&global)
        .arg("resolve")
        .arg(project.app_dir())
        .arg("--json")
        .output()
        .unwrap();

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let config: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(config["minSdk"], 21);
    assert_eq!(config["compileSdk"], 34);
    assert_eq!(config["javaVersion"], "11");
    assert_eq!(config["signing"]["placeholder"], true);
    assert_eq!(
        config["plugins"].as_array().and_then(|p| p.last()),
        Some(&serde_json::json!("dev.flutter.flutter-gradle-plugin"))
    );

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("warning"), "stderr: {stderr}");
    assert!(stderr.contains("`debug`"), "stderr: {stderr}");
}

#[test]
fn test_resolve_summary() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    droid(&global)
        .arg("resolve")
        .arg(project.app_dir().join("droid.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("com.example.wf3_app"))
        .stdout(predicate::str::contains("sha256:"));
}

#[test]
fn test_resolve_writes_output_file() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();
    let output = project.root().join("build").join("droid.json");

    droid(&global)
        .arg("resolve")
        .arg(project.app_dir())
        .arg("-o")
        .arg(&output)
        .args(["-s", "flutter.versionCode=42"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["versionCode"], 42);
}

#[test]
fn test_check_ok_with_warning() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    droid(&global)
        .arg("check")
        .arg(project.app_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok (1 warning)"))
        .stderr(predicate::str::contains("placeholder"));
}

#[test]
fn test_check_denies_placeholder_signing() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    droid(&global)
        .arg("check")
        .arg(project.app_dir())
        .arg("--deny-placeholder-signing")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("signingConfig"));
}

#[test]
fn test_invalid_application_id_fails() {
    let project = TestProject::new();
    project.write_descriptor(&WF3_DESCRIPTOR.replace(
        "applicationId = \"com.example.wf3_app\"",
        "applicationId = \"not valid!!\"",
    ));
    project.write_local_properties(droid_test_utils::WF3_LOCAL_PROPERTIES);
    let global = TempDir::new().unwrap();

    droid(&global)
        .arg("check")
        .arg(project.app_dir())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("applicationId"));
}

#[test]
fn test_no_discover_reports_missing_value() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    droid(&global)
        .arg("check")
        .arg(project.app_dir())
        .arg("--no-discover")
        .assert()
        .failure()
        .stderr(predicate::str::contains("flutter.compileSdkVersion"));
}

#[test]
fn test_missing_descriptor_fails() {
    let project = TestProject::new();
    let global = TempDir::new().unwrap();

    droid(&global)
        .arg("resolve")
        .arg(project.app_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("droid.toml"));
}

#[test]
fn test_bad_override_fails() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    droid(&global)
        .arg("resolve")
        .arg(project.app_dir())
        .args(["-s", "flutter.minSdkVersion"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_completions() {
    let global = TempDir::new().unwrap();
    droid(&global)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("droid"));
}
