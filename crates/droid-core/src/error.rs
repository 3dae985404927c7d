//! Error types for droid-core

use std::path::PathBuf;

use droid_meta::{ExternalKey, IdentifierIssue, JavaVersion};

/// Result type for droid-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop resolution.
///
/// Each resolution error names the descriptor field at fault; see
/// [`Error::field`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed `namespace` or `applicationId`
    #[error("Invalid identifier in `{field}`: `{value}`: {reason}")]
    InvalidIdentifier {
        field: &'static str,
        value: String,
        reason: IdentifierIssue,
    },

    /// A placeholder refers to a value the wrapper did not inject
    #[error("`{field}` refers to `{key}` but no value was injected")]
    MissingExternalValue {
        field: &'static str,
        key: ExternalKey,
    },

    /// An injected value does not fit the field's type
    #[error("`{field}` refers to `{key}`, whose injected value `{value}` is not valid")]
    InvalidExternalValue {
        field: &'static str,
        key: ExternalKey,
        value: String,
    },

    #[error(
        "`minSdk` {min_sdk} must not exceed targetSdk {target_sdk} or compileSdk {compile_sdk}"
    )]
    SdkRangeInvalid {
        min_sdk: u32,
        target_sdk: u32,
        compile_sdk: u32,
    },

    #[error("`versionCode` {value} is outside 1..=2100000000")]
    InvalidVersionCode { value: u32 },

    /// Java source, target and JVM target disagree
    #[error(
        "`sourceCompatibility` ({source_compatibility}), `targetCompatibility` ({target_compatibility}) and `jvmTarget` ({jvm_target}) must agree"
    )]
    CompatibilityMismatch {
        source_compatibility: JavaVersion,
        target_compatibility: JavaVersion,
        jvm_target: JavaVersion,
    },

    /// The host-integration plugin is not the last entry of `plugins`
    #[error(
        "`plugins` must end with `{expected}` (last entry: {})",
        .found.as_deref().unwrap_or("<none>")
    )]
    PluginOrderViolation {
        expected: String,
        found: Option<String>,
    },

    #[error("`plugins` lists `{plugin}` more than once")]
    DuplicatePlugin { plugin: String },

    #[error(
        "`signingConfig` names unknown profile `{profile}` (declared: {})",
        list_or_none(.declared)
    )]
    SigningProfileNotFound {
        profile: String,
        declared: Vec<String>,
    },

    /// Placeholder signing when the caller asked for it to be fatal
    #[error("`signingConfig` uses the placeholder `{profile}` profile for release builds")]
    PlaceholderSigningDenied { profile: String },

    /// `flutter.source` does not point at an existing path
    #[error("`flutter.source` does not exist: {}", .path.display())]
    SourceRootNotFound { path: PathBuf },

    /// Malformed `KEY=VALUE` override
    #[error("Invalid override `{spec}`: expected KEY=VALUE")]
    InvalidOverride { spec: String },

    // Transparent wrappers for underlying crate errors
    /// Descriptor error from droid-meta
    #[error(transparent)]
    Meta(#[from] droid_meta::Error),

    /// Filesystem error from droid-fs
    #[error(transparent)]
    Fs(#[from] droid_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl Error {
    /// Descriptor field the error is about, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidIdentifier { field, .. }
            | Error::MissingExternalValue { field, .. }
            | Error::InvalidExternalValue { field, .. } => Some(*field),
            Error::SdkRangeInvalid { .. } => Some("minSdk"),
            Error::InvalidVersionCode { .. } => Some("versionCode"),
            Error::CompatibilityMismatch { .. } => Some("sourceCompatibility"),
            Error::PluginOrderViolation { .. } | Error::DuplicatePlugin { .. } => Some("plugins"),
            Error::SigningProfileNotFound { .. } | Error::PlaceholderSigningDenied { .. } => {
                Some("signingConfig")
            }
            Error::SourceRootNotFound { .. } => Some("flutter.source"),
            Error::InvalidOverride { .. } | Error::Meta(_) | Error::Fs(_) | Error::Json(_) => None,
        }
    }
}
