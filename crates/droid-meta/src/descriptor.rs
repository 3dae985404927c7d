//! The validated-shape build descriptor record
//!
//! [`BuildDescriptor`] groups the flat file keys into the records the
//! resolver works with. It is produced either from a [`DescriptorFile`] by
//! the loader or programmatically through [`DescriptorBuilder`]; semantic
//! checks (identifier syntax, plugin order, Java agreement) belong to the
//! resolver, not to construction.

use std::collections::BTreeMap;

use droid_fs::NormalizedPath;

use crate::error::{Error, Result};
use crate::java::JavaVersion;
use crate::schema::{DescriptorFile, ReleaseOptions, SigningProfile};
use crate::value::{ExternalKey, Injectable, RawScalar};

/// Built-in signing profile every Android project has. Using it for
/// release builds is a placeholder state.
pub const DEBUG_SIGNING_PROFILE: &str = "debug";

/// Platform API levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLevels {
    pub compile: Injectable<u32>,
    pub min: Injectable<u32>,
    pub target: Injectable<u32>,
}

/// Build identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub code: Injectable<u32>,
    pub name: Injectable<String>,
}

/// Java source/target levels and the Kotlin JVM target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaCompatibility {
    pub source: JavaVersion,
    pub target: JavaVersion,
    pub jvm_target: JavaVersion,
}

impl JavaCompatibility {
    /// The same level for all three settings.
    pub fn uniform(version: JavaVersion) -> Self {
        Self {
            source: version,
            target: version,
            jvm_target: version,
        }
    }
}

/// A build descriptor ready for resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDescriptor {
    pub namespace: String,
    pub application_id: String,
    /// Plugin ids in application order
    pub plugins: Vec<String>,
    pub sdk: SdkLevels,
    pub version: VersionInfo,
    pub ndk_version: Option<Injectable<String>>,
    pub java: JavaCompatibility,
    /// Signing profile name used by release builds
    pub release_signing: String,
    pub signing_profiles: BTreeMap<String, SigningProfile>,
    pub release: ReleaseOptions,
    /// Flutter project root as written, relative to `base_dir`
    pub flutter_source_root: String,
    /// Directory that contained the descriptor
    pub base_dir: NormalizedPath,
}

impl BuildDescriptor {
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Interpret a parsed file. `base_dir` is the directory the file was
    /// read from.
    pub fn from_file(file: DescriptorFile, base_dir: NormalizedPath) -> Result<Self> {
        let java_level = |field: &'static str, raw: &RawScalar| -> Result<JavaVersion> {
            raw.to_text().parse::<JavaVersion>().map_err(|e| Error::InvalidField {
                field,
                message: e.to_string(),
            })
        };

        let ndk_version = file
            .ndk_version
            .as_ref()
            .map(|raw| Injectable::<String>::from_raw_text("ndkVersion", raw))
            .transpose()?;

        Ok(Self {
            namespace: file.namespace,
            application_id: file.application_id,
            plugins: file.plugins,
            sdk: SdkLevels {
                compile: Injectable::<u32>::from_raw_integer("compileSdk", &file.compile_sdk)?,
                min: Injectable::<u32>::from_raw_integer("minSdk", &file.min_sdk)?,
                target: Injectable::<u32>::from_raw_integer("targetSdk", &file.target_sdk)?,
            },
            version: VersionInfo {
                code: Injectable::<u32>::from_raw_integer("versionCode", &file.version_code)?,
                name: Injectable::<String>::from_raw_text("versionName", &file.version_name)?,
            },
            ndk_version,
            java: JavaCompatibility {
                source: java_level("sourceCompatibility", &file.source_compatibility)?,
                target: java_level("targetCompatibility", &file.target_compatibility)?,
                jvm_target: java_level("jvmTarget", &file.jvm_target)?,
            },
            release_signing: file.signing_config,
            signing_profiles: file.signing_configs,
            release: file.release,
            flutter_source_root: file.flutter.source,
            base_dir,
        })
    }

    /// Injection keys this descriptor refers to, without duplicates.
    pub fn placeholders(&self) -> Vec<ExternalKey> {
        let mut keys: Vec<ExternalKey> = [
            self.sdk.compile.placeholder(),
            self.sdk.min.placeholder(),
            self.sdk.target.placeholder(),
            self.version.code.placeholder(),
            self.version.name.placeholder(),
            self.ndk_version.as_ref().and_then(Injectable::placeholder),
        ]
        .into_iter()
        .flatten()
        .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// Programmatic construction of a [`BuildDescriptor`]
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    namespace: Option<String>,
    application_id: Option<String>,
    plugins: Vec<String>,
    compile_sdk: Option<Injectable<u32>>,
    min_sdk: Option<Injectable<u32>>,
    target_sdk: Option<Injectable<u32>>,
    version_code: Option<Injectable<u32>>,
    version_name: Option<Injectable<String>>,
    ndk_version: Option<Injectable<String>>,
    source_compatibility: Option<JavaVersion>,
    target_compatibility: Option<JavaVersion>,
    jvm_target: Option<JavaVersion>,
    release_signing: Option<String>,
    signing_profiles: BTreeMap<String, SigningProfile>,
    release: ReleaseOptions,
    flutter_source_root: Option<String>,
    base_dir: Option<NormalizedPath>,
}

impl DescriptorBuilder {
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    pub fn plugin(mut self, id: impl Into<String>) -> Self {
        self.plugins.push(id.into());
        self
    }

    pub fn plugins<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn compile_sdk(mut self, value: impl Into<Injectable<u32>>) -> Self {
        self.compile_sdk = Some(value.into());
        self
    }

    pub fn min_sdk(mut self, value: impl Into<Injectable<u32>>) -> Self {
        self.min_sdk = Some(value.into());
        self
    }

    pub fn target_sdk(mut self, value: impl Into<Injectable<u32>>) -> Self {
        self.target_sdk = Some(value.into());
        self
    }

    pub fn version_code(mut self, value: impl Into<Injectable<u32>>) -> Self {
        self.version_code = Some(value.into());
        self
    }

    pub fn version_name(mut self, value: impl Into<Injectable<String>>) -> Self {
        self.version_name = Some(value.into());
        self
    }

    pub fn ndk_version(mut self, value: impl Into<Injectable<String>>) -> Self {
        self.ndk_version = Some(value.into());
        self
    }

    /// Set source, target and JVM target to the same level.
    pub fn java(self, version: JavaVersion) -> Self {
        self.source_compatibility(version)
            .target_compatibility(version)
            .jvm_target(version)
    }

    pub fn source_compatibility(mut self, version: JavaVersion) -> Self {
        self.source_compatibility = Some(version);
        self
    }

    pub fn target_compatibility(mut self, version: JavaVersion) -> Self {
        self.target_compatibility = Some(version);
        self
    }

    pub fn jvm_target(mut self, version: JavaVersion) -> Self {
        self.jvm_target = Some(version);
        self
    }

    pub fn release_signing(mut self, profile: impl Into<String>) -> Self {
        self.release_signing = Some(profile.into());
        self
    }

    pub fn signing_profile(mut self, name: impl Into<String>, profile: SigningProfile) -> Self {
        self.signing_profiles.insert(name.into(), profile);
        self
    }

    pub fn release_options(mut self, release: ReleaseOptions) -> Self {
        self.release = release;
        self
    }

    pub fn flutter_source_root(mut self, source: impl Into<String>) -> Self {
        self.flutter_source_root = Some(source.into());
        self
    }

    pub fn base_dir(mut self, dir: impl Into<NormalizedPath>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<BuildDescriptor> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
            value.ok_or(Error::MissingField { field })
        }

        Ok(BuildDescriptor {
            namespace: required(self.namespace, "namespace")?,
            application_id: required(self.application_id, "applicationId")?,
            plugins: self.plugins,
            sdk: SdkLevels {
                compile: required(self.compile_sdk, "compileSdk")?,
                min: required(self.min_sdk, "minSdk")?,
                target: required(self.target_sdk, "targetSdk")?,
            },
            version: VersionInfo {
                code: required(self.version_code, "versionCode")?,
                name: required(self.version_name, "versionName")?,
            },
            ndk_version: self.ndk_version,
            java: JavaCompatibility {
                source: required(self.source_compatibility, "sourceCompatibility")?,
                target: required(self.target_compatibility, "targetCompatibility")?,
                jvm_target: required(self.jvm_target, "jvmTarget")?,
            },
            release_signing: self
                .release_signing
                .unwrap_or_else(|| DEBUG_SIGNING_PROFILE.to_string()),
            signing_profiles: self.signing_profiles,
            release: self.release,
            flutter_source_root: required(self.flutter_source_root, "flutter.source")?,
            base_dir: required(self.base_dir, "baseDir")?,
        })
    }
}
