//! End-to-end resolution scenarios
//!
//! Each test lays out a Flutter project on disk, loads its descriptor,
//! layers the injected values and resolves, the way the `droid` binary does.

use droid_core::{
    ConfigResolver, Error, ExternalValuesResolver, Resolution, ResolveOptions, ResolvedConfig,
    Warning,
};
use droid_fs::NormalizedPath;
use droid_meta::DescriptorLoader;
use droid_test_utils::{TestProject, WF3_DESCRIPTOR, WF3_LOCAL_PROPERTIES};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

const WF3_JSON: &str = r#"{
  "namespace": "com.example.wf3_app",
  "applicationId": "com.example.wf3_app",
  "plugins": [
    "com.android.application",
    "org.jetbrains.kotlin.android",
    "dev.flutter.flutter-gradle-plugin"
  ],
  "compileSdk": "flutter.compileSdkVersion",
  "minSdk": "flutter.minSdkVersion",
  "targetSdk": "flutter.targetSdkVersion",
  "versionCode": "flutter.versionCode",
  "versionName": "flutter.versionName",
  "ndkVersion": "27.0.12077973",
  "sourceCompatibility": "VERSION_11",
  "targetCompatibility": "VERSION_11",
  "jvmTarget": "11",
  "signingConfig": "debug",
  "flutter": { "source": "../.." }
}"#;

const WF3_YAML: &str = r#"namespace: com.example.wf3_app
applicationId: com.example.wf3_app
plugins:
  - com.android.application
  - kotlin-android
  - dev.flutter.flutter-gradle-plugin
compileSdk: flutter.compileSdkVersion
minSdk: flutter.minSdkVersion
targetSdk: flutter.targetSdkVersion
versionCode: flutter.versionCode
versionName: flutter.versionName
ndkVersion: "27.0.12077973"
sourceCompatibility: JavaVersion.VERSION_11
targetCompatibility: "11"
jvmTarget: "11"
flutter:
  source: ../..
"#;

/// Load, layer and resolve the descriptor in `android/app`.
fn resolve_project(
    project: &TestProject,
    global: &TempDir,
    options: ResolveOptions,
    overrides: &[&str],
) -> droid_core::Result<Resolution> {
    let descriptor = DescriptorLoader::new().load(&NormalizedPath::new(project.app_dir()))?;

    let mut layers = ExternalValuesResolver::new(descriptor.base_dir.clone())
        .with_global_config_dir(global.path());
    for spec in overrides {
        layers = layers.with_override(*spec);
    }
    let external = layers.resolve()?;

    ConfigResolver::with_options(options).resolve(&descriptor, &external)
}

#[test]
fn test_wf3_app_end_to_end() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    let resolution = resolve_project(&project, &global, ResolveOptions::default(), &[]).unwrap();

    let config = &resolution.config;
    assert_eq!(config.namespace, "com.example.wf3_app");
    assert_eq!((config.compile_sdk, config.min_sdk, config.target_sdk), (34, 21, 34));
    assert_eq!((config.version_code, config.version_name.as_str()), (1, "1.0.0"));
    assert_eq!(config.source_root, dunce::canonicalize(project.root()).unwrap());
    assert_eq!(
        resolution.warnings,
        vec![Warning::PlaceholderSigning {
            profile: "debug".to_string()
        }]
    );
}

#[test]
fn test_output_file_round_trips() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();
    let resolution = resolve_project(&project, &global, ResolveOptions::default(), &[]).unwrap();

    let output = NormalizedPath::new(project.root().join("build/droid.json"));
    droid_fs::io::write_text(&output, &resolution.config.to_json().unwrap()).unwrap();

    let reread: ResolvedConfig =
        serde_json::from_str(&droid_fs::io::read_text(&output).unwrap()).unwrap();
    assert_eq!(reread, resolution.config);
    assert_eq!(
        reread.fingerprint().unwrap(),
        resolution.config.fingerprint().unwrap()
    );
}

#[rstest]
#[case("droid.json", WF3_JSON)]
#[case("droid.yaml", WF3_YAML)]
fn test_formats_resolve_identically(#[case] file_name: &str, #[case] content: &str) {
    let global = TempDir::new().unwrap();

    let toml_project = TestProject::wf3();
    let expected = resolve_project(&toml_project, &global, ResolveOptions::default(), &[])
        .unwrap()
        .config;

    let project = TestProject::new();
    project.write_descriptor_as(file_name, content);
    project.write_local_properties(WF3_LOCAL_PROPERTIES);
    let actual = resolve_project(&project, &global, ResolveOptions::default(), &[])
        .unwrap()
        .config;

    // Only the project location differs between the two temp projects
    assert_eq!(
        ResolvedConfig {
            source_root: expected.source_root.clone(),
            ..actual
        },
        expected
    );
}

#[test]
fn test_release_signing_with_upload_profile() {
    let project = TestProject::new();
    project.write_descriptor(&WF3_DESCRIPTOR.replace(
        "signingConfig = \"debug\"\n",
        "signingConfig = \"upload\"\n\n[signingConfigs.upload]\nstoreFile = \"../upload-keystore.jks\"\nkeyAlias = \"upload\"\n",
    ));
    project.write_local_properties(WF3_LOCAL_PROPERTIES);
    let global = TempDir::new().unwrap();

    let options = ResolveOptions {
        deny_placeholder_signing: true,
        ..ResolveOptions::default()
    };
    let resolution = resolve_project(&project, &global, options, &[]).unwrap();

    let signing = &resolution.config.signing;
    assert_eq!(signing.profile, "upload");
    assert!(!signing.placeholder);
    assert_eq!(
        signing.store_file.as_deref(),
        Some(project.android_dir().join("upload-keystore.jks").as_path())
    );
    assert!(resolution.warnings.is_empty());
}

#[test]
fn test_ci_override_bumps_version() {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    let resolution = resolve_project(
        &project,
        &global,
        ResolveOptions::default(),
        &["versionCode=1001", "flutter.versionName=1.1.0"],
    )
    .unwrap();

    assert_eq!(resolution.config.version_code, 1001);
    assert_eq!(resolution.config.version_name, "1.1.0");
}

#[rstest]
#[case("versionCode=0", "versionCode")]
#[case("minSdkVersion=40", "minSdk")]
#[case("targetSdkVersion=abc", "targetSdk")]
fn test_bad_injected_values_name_the_field(#[case] spec: &str, #[case] field: &str) {
    let project = TestProject::wf3();
    let global = TempDir::new().unwrap();

    let err = resolve_project(&project, &global, ResolveOptions::default(), &[spec]).unwrap_err();

    assert_eq!(err.field(), Some(field), "error: {err}");
}

#[test]
fn test_project_moved_without_flutter_root() {
    let project = TestProject::new();
    project.write_descriptor(&WF3_DESCRIPTOR.replace("source = \"../..\"", "source = \"../../../gone\""));
    project.write_local_properties(WF3_LOCAL_PROPERTIES);
    let global = TempDir::new().unwrap();

    let err = resolve_project(&project, &global, ResolveOptions::default(), &[]).unwrap_err();

    assert!(matches!(err, Error::SourceRootNotFound { .. }), "error: {err}");
}
