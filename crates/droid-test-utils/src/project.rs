//! [`TestProject`] builder for descriptor resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Descriptor equivalent to the stock Flutter `android/app` module of
/// `wf3_app`: every SDK and version value injected, debug signing.
pub const WF3_DESCRIPTOR: &str = r#"namespace = "com.example.wf3_app"
applicationId = "com.example.wf3_app"
plugins = [
    "com.android.application",
    "org.jetbrains.kotlin.android",
    "dev.flutter.flutter-gradle-plugin",
]
compileSdk = "flutter.compileSdkVersion"
minSdk = "flutter.minSdkVersion"
targetSdk = "flutter.targetSdkVersion"
versionCode = "flutter.versionCode"
versionName = "flutter.versionName"
ndkVersion = "27.0.12077973"
sourceCompatibility = "VERSION_11"
targetCompatibility = "VERSION_11"
jvmTarget = "11"
signingConfig = "debug"

[flutter]
source = "../.."
"#;

/// `android/local.properties` as the Flutter tool writes it, extended with
/// the SDK levels the wrapper injects.
pub const WF3_LOCAL_PROPERTIES: &str = "\
sdk.dir=/opt/android-sdk
flutter.sdk=/opt/flutter
flutter.buildMode=release
flutter.versionName=1.0.0
flutter.versionCode=1
flutter.compileSdkVersion=34
flutter.minSdkVersion=21
flutter.targetSdkVersion=34
";

/// A temporary Flutter project:
///
/// ```text
/// <root>/pubspec.yaml
/// <root>/android/app/
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create the project skeleton.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let project = Self { temp_dir };
        fs::create_dir_all(project.app_dir()).unwrap();
        project.write_file("pubspec.yaml", "name: wf3_app\nversion: 1.0.0+1\n");
        project
    }

    /// Flutter project root (where `pubspec.yaml` lives).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn android_dir(&self) -> PathBuf {
        self.root().join("android")
    }

    pub fn app_dir(&self) -> PathBuf {
        self.android_dir().join("app")
    }

    /// Write `android/app/droid.toml` and return its path.
    pub fn write_descriptor(&self, content: &str) -> PathBuf {
        self.write_descriptor_as("droid.toml", content)
    }

    /// Write a descriptor under `android/app/` with the given file name.
    pub fn write_descriptor_as(&self, name: &str, content: &str) -> PathBuf {
        let path = self.app_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `android/local.properties` and return its path.
    pub fn write_local_properties(&self, content: &str) -> PathBuf {
        let path = self.android_dir().join("local.properties");
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Set up the stock wf3 project: descriptor plus local.properties.
    pub fn wf3() -> Self {
        let project = Self::new();
        project.write_descriptor(WF3_DESCRIPTOR);
        project.write_local_properties(WF3_LOCAL_PROPERTIES);
        project
    }

    /// Assert a file exists relative to the project root.
    pub fn assert_file_exists(&self, rel: &str) {
        let path = self.root().join(rel);
        assert!(path.is_file(), "expected file to exist: {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wf3_project_has_expected_layout() {
        let project = TestProject::wf3();
        project.assert_file_exists("pubspec.yaml");
        project.assert_file_exists("android/app/droid.toml");
        project.assert_file_exists("android/local.properties");
    }
}
