//! Values that are either written in the descriptor or injected by the
//! wrapper tool at build time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A value the Flutter wrapper tool supplies at resolution time.
///
/// The string form (`flutter.minSdkVersion`, ...) is both how a descriptor
/// refers to the value and the key under which `local.properties` stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExternalKey {
    CompileSdkVersion,
    MinSdkVersion,
    TargetSdkVersion,
    NdkVersion,
    VersionCode,
    VersionName,
}

impl ExternalKey {
    /// Every injection key, in the order the wrapper documents them.
    pub const ALL: [ExternalKey; 6] = [
        ExternalKey::CompileSdkVersion,
        ExternalKey::MinSdkVersion,
        ExternalKey::TargetSdkVersion,
        ExternalKey::NdkVersion,
        ExternalKey::VersionCode,
        ExternalKey::VersionName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompileSdkVersion => "flutter.compileSdkVersion",
            Self::MinSdkVersion => "flutter.minSdkVersion",
            Self::TargetSdkVersion => "flutter.targetSdkVersion",
            Self::NdkVersion => "flutter.ndkVersion",
            Self::VersionCode => "flutter.versionCode",
            Self::VersionName => "flutter.versionName",
        }
    }

    /// Whether the wrapper injects an integer under this key.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::CompileSdkVersion | Self::MinSdkVersion | Self::TargetSdkVersion | Self::VersionCode
        )
    }

    /// Short human description, used by `droid keys`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::CompileSdkVersion => "Android API level compiled against",
            Self::MinSdkVersion => "lowest supported Android API level",
            Self::TargetSdkVersion => "Android API level the app targets",
            Self::NdkVersion => "NDK version used for native code",
            Self::VersionCode => "monotonic integer build number",
            Self::VersionName => "user-visible version string",
        }
    }
}

impl FromStr for ExternalKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ExternalKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownExternalKey { key: s.to_string() })
    }
}

impl fmt::Display for ExternalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar as written in a descriptor file, before interpretation.
///
/// Unquoted numbers such as `1.8` in YAML or TOML arrive as [`Float`](Self::Float).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawScalar {
    /// The value rendered as text, numbers included.
    pub fn to_text(&self) -> String {
        match self {
            RawScalar::Integer(n) => n.to_string(),
            RawScalar::Float(x) => x.to_string(),
            RawScalar::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<&str> for RawScalar {
    fn from(s: &str) -> Self {
        RawScalar::Text(s.to_string())
    }
}

impl From<i64> for RawScalar {
    fn from(n: i64) -> Self {
        RawScalar::Integer(n)
    }
}

/// A descriptor value that is either a literal or a reference to an
/// injected [`ExternalKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injectable<T> {
    Literal(T),
    Placeholder(ExternalKey),
}

impl<T> Injectable<T> {
    pub fn placeholder(&self) -> Option<ExternalKey> {
        match self {
            Injectable::Placeholder(key) => Some(*key),
            Injectable::Literal(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder().is_some()
    }
}

impl<T> From<ExternalKey> for Injectable<T> {
    fn from(key: ExternalKey) -> Self {
        Injectable::Placeholder(key)
    }
}

impl From<u32> for Injectable<u32> {
    fn from(value: u32) -> Self {
        Injectable::Literal(value)
    }
}

impl From<&str> for Injectable<String> {
    fn from(value: &str) -> Self {
        Injectable::Literal(value.to_string())
    }
}

impl From<String> for Injectable<String> {
    fn from(value: String) -> Self {
        Injectable::Literal(value)
    }
}

impl Injectable<u32> {
    /// Interpret a raw scalar for an integer field.
    ///
    /// Text naming an integer injection key becomes a placeholder; other
    /// text must parse as a non-negative integer.
    pub fn from_raw_integer(field: &'static str, raw: &RawScalar) -> Result<Self> {
        match raw {
            RawScalar::Integer(n) => u32::try_from(*n)
                .map(Injectable::Literal)
                .map_err(|_| Error::InvalidField {
                    field,
                    message: format!("{n} is not a valid non-negative integer"),
                }),
            RawScalar::Float(x) => Err(Error::InvalidField {
                field,
                message: format!("{x} is not an integer"),
            }),
            RawScalar::Text(text) => {
                let text = text.trim();
                if let Ok(key) = text.parse::<ExternalKey>() {
                    if !key.is_integer() {
                        return Err(Error::InvalidField {
                            field,
                            message: format!("`{key}` injects text, not an integer"),
                        });
                    }
                    return Ok(Injectable::Placeholder(key));
                }
                text.parse::<u32>()
                    .map(Injectable::Literal)
                    .map_err(|_| Error::InvalidField {
                        field,
                        message: format!(
                            "`{text}` is neither an integer nor an injection key"
                        ),
                    })
            }
        }
    }
}

impl Injectable<String> {
    /// Interpret a raw scalar for a text field.
    ///
    /// Text naming an injection key becomes a placeholder; anything else,
    /// integers included, is taken literally.
    pub fn from_raw_text(field: &'static str, raw: &RawScalar) -> Result<Self> {
        let text = raw.to_text();
        if text.is_empty() {
            return Err(Error::InvalidField {
                field,
                message: "value must not be empty".to_string(),
            });
        }
        Ok(match text.parse::<ExternalKey>() {
            Ok(key) => Injectable::Placeholder(key),
            Err(_) => Injectable::Literal(text),
        })
    }
}
