//! The resolver's output record

use std::path::PathBuf;

use droid_meta::{JavaVersion, ReleaseOptions};
use serde::{Deserialize, Serialize};

use crate::{Result, Warning};

/// Signing profile selected for release builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSigning {
    pub profile: String,
    /// `true` for the built-in debug profile
    pub placeholder: bool,
    /// Keystore location, resolved against the descriptor directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
}

/// A fully validated build configuration with every placeholder substituted
///
/// This is what the external compiler/packager consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub namespace: String,
    pub application_id: String,
    /// Canonical plugin ids, host-integration plugin last
    pub plugins: Vec<String>,
    pub compile_sdk: u32,
    pub min_sdk: u32,
    pub target_sdk: u32,
    pub version_code: u32,
    pub version_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndk_version: Option<String>,
    /// Shared source, target and JVM target level
    pub java_version: JavaVersion,
    pub signing: ResolvedSigning,
    pub release: ReleaseOptions,
    /// Absolute, canonical Flutter project root
    pub source_root: PathBuf,
}

impl ResolvedConfig {
    /// Pretty JSON for the packager.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `sha256:<hex>` of the compact JSON form.
    ///
    /// Equal configurations always have equal fingerprints.
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        Ok(droid_fs::checksum::compute_content_checksum(&canonical))
    }
}

/// Successful result of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: ResolvedConfig,
    /// Non-fatal findings, in the order they were raised
    pub warnings: Vec<Warning>,
}

impl Resolution {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
