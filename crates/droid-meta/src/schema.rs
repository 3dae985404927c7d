//! On-disk descriptor schema
//!
//! The file is flat, mirroring the keys of the Gradle `android { }` block.
//! Unknown keys are rejected so a typo never silently drops a setting.
//!
//! # Example TOML
//!
//! ```toml
//! namespace = "com.example.wf3_app"
//! applicationId = "com.example.wf3_app"
//! plugins = ["com.android.application", "org.jetbrains.kotlin.android", "dev.flutter.flutter-gradle-plugin"]
//! compileSdk = "flutter.compileSdkVersion"
//! minSdk = "flutter.minSdkVersion"
//! targetSdk = "flutter.targetSdkVersion"
//! versionCode = "flutter.versionCode"
//! versionName = "flutter.versionName"
//! ndkVersion = "27.0.12077973"
//! sourceCompatibility = "VERSION_11"
//! targetCompatibility = "VERSION_11"
//! jvmTarget = "11"
//! signingConfig = "debug"
//!
//! [flutter]
//! source = "../.."
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::DEBUG_SIGNING_PROFILE;
use crate::value::RawScalar;

fn default_signing_config() -> String {
    DEBUG_SIGNING_PROFILE.to_string()
}

/// A descriptor exactly as written on disk
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescriptorFile {
    pub namespace: String,
    pub application_id: String,
    /// Plugin ids in application order
    #[serde(default)]
    pub plugins: Vec<String>,
    pub compile_sdk: RawScalar,
    pub min_sdk: RawScalar,
    pub target_sdk: RawScalar,
    pub version_code: RawScalar,
    pub version_name: RawScalar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndk_version: Option<RawScalar>,
    pub source_compatibility: RawScalar,
    pub target_compatibility: RawScalar,
    pub jvm_target: RawScalar,
    /// Signing profile used by the release build type
    #[serde(default = "default_signing_config")]
    pub signing_config: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub signing_configs: BTreeMap<String, SigningProfile>,
    #[serde(default)]
    pub release: ReleaseOptions,
    pub flutter: FlutterSection,
}

/// The `flutter { }` block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FlutterSection {
    /// Flutter project root, relative to the descriptor's directory
    pub source: String,
}

/// A named signing profile.
///
/// Only the reference is described here; passwords live in the external
/// signing store and are not accepted in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SigningProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
}

/// Code shrinking settings of the release build type
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReleaseOptions {
    #[serde(default)]
    pub minify_enabled: bool,
    #[serde(default)]
    pub proguard_files: Vec<String>,
}
