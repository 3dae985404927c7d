//! Values injected by the Flutter wrapper tool
//!
//! The wrapper writes its values into `local.properties`; users may also keep
//! defaults in a global file or pass overrides on the command line. Sources
//! are layered with later ones winning.

use std::collections::BTreeMap;
use std::path::PathBuf;

use droid_fs::NormalizedPath;
use droid_meta::ExternalKey;

use super::properties::parse_properties;
use crate::{Error, Result};

/// File name of the properties file the Flutter tool maintains
pub const LOCAL_PROPERTIES: &str = "local.properties";

/// File name of the user-wide defaults layer inside the config directory
pub const GLOBAL_PROPERTIES: &str = "external.properties";

/// Injected values keyed by [`ExternalKey`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalValues {
    values: BTreeMap<ExternalKey, String>,
}

impl ExternalValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: ExternalKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Store a value. Surrounding whitespace is dropped.
    pub fn set(&mut self, key: ExternalKey, value: impl Into<String>) {
        let value = value.into();
        self.values.insert(key, value.trim().to_string());
    }

    pub fn get(&self, key: ExternalKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn compile_sdk_version(self, level: u32) -> Self {
        self.with(ExternalKey::CompileSdkVersion, level.to_string())
    }

    pub fn min_sdk_version(self, level: u32) -> Self {
        self.with(ExternalKey::MinSdkVersion, level.to_string())
    }

    pub fn target_sdk_version(self, level: u32) -> Self {
        self.with(ExternalKey::TargetSdkVersion, level.to_string())
    }

    pub fn ndk_version(self, version: impl Into<String>) -> Self {
        self.with(ExternalKey::NdkVersion, version)
    }

    pub fn version_code(self, code: u32) -> Self {
        self.with(ExternalKey::VersionCode, code.to_string())
    }

    pub fn version_name(self, name: impl Into<String>) -> Self {
        self.with(ExternalKey::VersionName, name)
    }

    /// Collect the injection keys from properties content.
    ///
    /// Unrelated entries such as `sdk.dir` are ignored; for repeated keys the
    /// last one wins.
    pub fn from_properties(content: &str) -> Self {
        let mut values = Self::new();
        for (key, value) in parse_properties(content) {
            if let Ok(key) = key.parse::<ExternalKey>() {
                values.set(key, value);
            }
        }
        values
    }

    /// Read a properties file.
    pub fn load_properties(path: &NormalizedPath) -> Result<Self> {
        let content = droid_fs::io::read_text(path)?;
        let values = Self::from_properties(&content);
        tracing::debug!(%path, count = values.len(), "Loaded external values");
        Ok(values)
    }

    /// Overlay `other` on top of `self`; values in `other` win.
    pub fn merge(&mut self, other: &ExternalValues) {
        for (key, value) in &other.values {
            self.values.insert(*key, value.clone());
        }
    }

    /// Apply a `KEY=VALUE` override.
    ///
    /// The key may be given in full (`flutter.minSdkVersion`) or without the
    /// `flutter.` prefix (`minSdkVersion`).
    pub fn apply_override(&mut self, spec: &str) -> Result<()> {
        let invalid = || Error::InvalidOverride {
            spec: spec.to_string(),
        };

        let (key, value) = spec.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }

        let key = match key.parse::<ExternalKey>() {
            Ok(key) => key,
            Err(_) => format!("flutter.{key}").parse::<ExternalKey>()?,
        };
        self.set(key, value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExternalKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Collects [`ExternalValues`] from every layer
///
/// Layers, lowest precedence first:
/// 1. Global defaults (`<config_dir>/droid/external.properties`)
/// 2. `local.properties` next to the Android project (`android/`)
/// 3. `local.properties` in the descriptor directory
/// 4. Explicit properties files, in the order given
/// 5. `KEY=VALUE` overrides, in the order given
///
/// Missing layers 1 to 3 are skipped; a missing explicit file is an error.
#[derive(Debug, Clone)]
pub struct ExternalValuesResolver {
    descriptor_dir: NormalizedPath,
    global_config_dir_override: Option<PathBuf>,
    discover: bool,
    properties_files: Vec<NormalizedPath>,
    overrides: Vec<String>,
}

impl ExternalValuesResolver {
    /// Create a resolver for the descriptor living in `descriptor_dir`.
    pub fn new(descriptor_dir: NormalizedPath) -> Self {
        Self {
            descriptor_dir,
            global_config_dir_override: None,
            discover: true,
            properties_files: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Use `dir` instead of the platform config directory for layer 1.
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Skip the global and `local.properties` layers.
    pub fn without_discovery(mut self) -> Self {
        self.discover = false;
        self
    }

    pub fn with_properties_file(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.properties_files.push(path.into());
        self
    }

    pub fn with_override(mut self, spec: impl Into<String>) -> Self {
        self.overrides.push(spec.into());
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("droid"))
    }

    /// Paths of the optional layers, lowest precedence first.
    fn discovered_paths(&self) -> Vec<NormalizedPath> {
        let mut paths = Vec::new();
        if let Some(global_dir) = self.global_config_dir() {
            paths.push(NormalizedPath::new(global_dir.join(GLOBAL_PROPERTIES)));
        }
        if let Some(android_dir) = self.descriptor_dir.parent() {
            paths.push(android_dir.join(LOCAL_PROPERTIES));
        }
        paths.push(self.descriptor_dir.join(LOCAL_PROPERTIES));
        paths
    }

    /// Merge every layer into one set of values.
    pub fn resolve(&self) -> Result<ExternalValues> {
        let mut values = ExternalValues::new();

        if self.discover {
            for path in self.discovered_paths() {
                if path.is_file() {
                    values.merge(&ExternalValues::load_properties(&path)?);
                } else {
                    tracing::debug!(%path, "No external values found - skipping");
                }
            }
        }

        for path in &self.properties_files {
            values.merge(&ExternalValues::load_properties(path)?);
        }

        for spec in &self.overrides {
            values.apply_override(spec)?;
        }

        Ok(values)
    }
}
