//! Resolution of a build descriptor against injected values
//!
//! [`ConfigResolver`] runs the checks in a fixed order and stops at the
//! first fatal error:
//! 1. identifiers
//! 2. placeholder substitution and SDK/version ranges
//! 3. Java level agreement
//! 4. plugin order
//! 5. release signing
//! 6. Flutter source root
//!
//! Non-fatal findings are collected as [`Warning`]s and logged.

use std::collections::HashSet;
use std::path::PathBuf;

use droid_meta::{
    BuildDescriptor, DEBUG_SIGNING_PROFILE, HOST_INTEGRATION_PLUGIN, Injectable, JavaVersion,
    PluginRegistry, validate_package_name,
};

use super::external::ExternalValues;
use super::resolved::{Resolution, ResolvedConfig, ResolvedSigning};
use crate::{Error, Result, Warning};

/// Highest `versionCode` Google Play accepts
pub const MAX_VERSION_CODE: u32 = 2_100_000_000;

/// Knobs for [`ConfigResolver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Plugin id that must be applied last
    pub host_plugin: String,
    /// Treat debug signing of release builds as an error
    pub deny_placeholder_signing: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            host_plugin: HOST_INTEGRATION_PLUGIN.to_string(),
            deny_placeholder_signing: false,
        }
    }
}

/// Stateless resolver; the same inputs always give the same result.
#[derive(Default)]
pub struct ConfigResolver {
    options: ResolveOptions,
    registry: PluginRegistry,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolveOptions) -> Self {
        Self {
            options,
            registry: PluginRegistry::with_builtins(),
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Validate `descriptor`, substitute `external` values and produce the
    /// resolved configuration.
    pub fn resolve(
        &self,
        descriptor: &BuildDescriptor,
        external: &ExternalValues,
    ) -> Result<Resolution> {
        let mut warnings = Vec::new();

        tracing::debug!(namespace = %descriptor.namespace, "Checking identifiers");
        check_identifier("namespace", &descriptor.namespace)?;
        check_identifier("applicationId", &descriptor.application_id)?;
        if descriptor.application_id != descriptor.namespace {
            warnings.push(Warning::ApplicationIdDiffersFromNamespace {
                namespace: descriptor.namespace.clone(),
                application_id: descriptor.application_id.clone(),
            });
        }

        tracing::debug!(count = external.len(), "Substituting external values");
        for (key, value) in external.iter() {
            tracing::trace!(%key, value, "External value");
        }
        let compile_sdk = inject_integer("compileSdk", &descriptor.sdk.compile, external)?;
        let min_sdk = inject_integer("minSdk", &descriptor.sdk.min, external)?;
        let target_sdk = inject_integer("targetSdk", &descriptor.sdk.target, external)?;
        let version_code = inject_integer("versionCode", &descriptor.version.code, external)?;
        let version_name = inject_text("versionName", &descriptor.version.name, external)?;
        let ndk_version = descriptor
            .ndk_version
            .as_ref()
            .map(|value| inject_text("ndkVersion", value, external))
            .transpose()?;

        if min_sdk > target_sdk || min_sdk > compile_sdk {
            return Err(Error::SdkRangeInvalid {
                min_sdk,
                target_sdk,
                compile_sdk,
            });
        }
        if target_sdk > compile_sdk {
            warnings.push(Warning::TargetSdkAboveCompileSdk {
                target_sdk,
                compile_sdk,
            });
        }
        if !(1..=MAX_VERSION_CODE).contains(&version_code) {
            return Err(Error::InvalidVersionCode {
                value: version_code,
            });
        }

        tracing::debug!("Checking Java compatibility");
        let java_version = check_java(descriptor)?;

        tracing::debug!(host = %self.options.host_plugin, "Checking plugin order");
        let plugins = self.check_plugins(&descriptor.plugins)?;

        tracing::debug!(profile = %descriptor.release_signing, "Resolving release signing");
        let signing = self.resolve_signing(descriptor, &mut warnings)?;
        if descriptor.release.minify_enabled && descriptor.release.proguard_files.is_empty() {
            warnings.push(Warning::MinifyWithoutRules);
        }

        tracing::debug!(source = %descriptor.flutter_source_root, "Resolving Flutter source root");
        let source_root = resolve_source_root(descriptor)?;

        for warning in &warnings {
            tracing::warn!(field = warning.field(), "{warning}");
        }

        let config = ResolvedConfig {
            namespace: descriptor.namespace.clone(),
            application_id: descriptor.application_id.clone(),
            plugins,
            compile_sdk,
            min_sdk,
            target_sdk,
            version_code,
            version_name,
            ndk_version,
            java_version,
            signing,
            release: descriptor.release.clone(),
            source_root,
        };

        tracing::info!(
            application_id = %config.application_id,
            warnings = warnings.len(),
            "Resolved build configuration"
        );

        Ok(Resolution { config, warnings })
    }

    fn check_plugins(&self, declared: &[String]) -> Result<Vec<String>> {
        let host = self.registry.canonical(&self.options.host_plugin);
        let plugins: Vec<String> = declared
            .iter()
            .map(|id| self.registry.canonical(id.trim()).to_string())
            .collect();

        match plugins.last() {
            Some(last) if last == host => {}
            last => {
                return Err(Error::PluginOrderViolation {
                    expected: host.to_string(),
                    found: last.cloned(),
                });
            }
        }

        let mut seen = HashSet::new();
        for plugin in &plugins {
            if !seen.insert(plugin.as_str()) {
                return Err(Error::DuplicatePlugin {
                    plugin: plugin.clone(),
                });
            }
            if !self.registry.is_known(plugin) {
                tracing::debug!(%plugin, "Plugin is not in the built-in registry");
            }
        }

        Ok(plugins)
    }

    fn resolve_signing(
        &self,
        descriptor: &BuildDescriptor,
        warnings: &mut Vec<Warning>,
    ) -> Result<ResolvedSigning> {
        let profile = descriptor.release_signing.trim();

        if profile == DEBUG_SIGNING_PROFILE {
            if self.options.deny_placeholder_signing {
                return Err(Error::PlaceholderSigningDenied {
                    profile: profile.to_string(),
                });
            }
            warnings.push(Warning::PlaceholderSigning {
                profile: profile.to_string(),
            });
            return Ok(ResolvedSigning {
                profile: profile.to_string(),
                placeholder: true,
                store_file: None,
                key_alias: None,
            });
        }

        let declared = descriptor.signing_profiles.get(profile).ok_or_else(|| {
            Error::SigningProfileNotFound {
                profile: profile.to_string(),
                declared: descriptor.signing_profiles.keys().cloned().collect(),
            }
        })?;

        Ok(ResolvedSigning {
            profile: profile.to_string(),
            placeholder: false,
            store_file: declared
                .store_file
                .as_deref()
                .map(|file| descriptor.base_dir.resolve(file).to_native()),
            key_alias: declared.key_alias.clone(),
        })
    }
}

/// Resolve with [`ResolveOptions::default`].
pub fn resolve(descriptor: &BuildDescriptor, external: &ExternalValues) -> Result<Resolution> {
    ConfigResolver::new().resolve(descriptor, external)
}

fn check_identifier(field: &'static str, value: &str) -> Result<()> {
    validate_package_name(value).map_err(|reason| Error::InvalidIdentifier {
        field,
        value: value.to_string(),
        reason,
    })
}

fn injected<'a>(
    field: &'static str,
    key: droid_meta::ExternalKey,
    external: &'a ExternalValues,
) -> Result<&'a str> {
    external
        .get(key)
        .ok_or(Error::MissingExternalValue { field, key })
}

fn inject_integer(
    field: &'static str,
    value: &Injectable<u32>,
    external: &ExternalValues,
) -> Result<u32> {
    match value {
        Injectable::Literal(n) => Ok(*n),
        Injectable::Placeholder(key) => {
            let raw = injected(field, *key, external)?;
            raw.parse::<u32>().map_err(|_| Error::InvalidExternalValue {
                field,
                key: *key,
                value: raw.to_string(),
            })
        }
    }
}

fn inject_text(
    field: &'static str,
    value: &Injectable<String>,
    external: &ExternalValues,
) -> Result<String> {
    match value {
        Injectable::Literal(text) => Ok(text.clone()),
        Injectable::Placeholder(key) => {
            let raw = injected(field, *key, external)?;
            if raw.is_empty() {
                return Err(Error::InvalidExternalValue {
                    field,
                    key: *key,
                    value: raw.to_string(),
                });
            }
            Ok(raw.to_string())
        }
    }
}

fn check_java(descriptor: &BuildDescriptor) -> Result<JavaVersion> {
    let java = descriptor.java;
    if java.source != java.target || java.target != java.jvm_target {
        return Err(Error::CompatibilityMismatch {
            source_compatibility: java.source,
            target_compatibility: java.target,
            jvm_target: java.jvm_target,
        });
    }
    Ok(java.source)
}

fn resolve_source_root(descriptor: &BuildDescriptor) -> Result<PathBuf> {
    let source = descriptor.flutter_source_root.trim();
    let resolved = descriptor.base_dir.resolve(source);
    let not_found = || Error::SourceRootNotFound {
        path: resolved.to_native(),
    };

    if source.is_empty() {
        return Err(not_found());
    }

    // Missing, unreadable and vanished roots all fail here
    resolved.canonicalize().map_err(|err| {
        tracing::debug!(path = %resolved, error = %err, "Cannot canonicalize Flutter source root");
        not_found()
    })
}
