//! Java / JVM bytecode levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A Java language / bytecode level, stored as its major version.
///
/// Accepts the spellings found in Gradle scripts: `11`, `VERSION_11`,
/// `JavaVersion.VERSION_11`, `1.8` and `VERSION_1_8`. Levels up to 8 display
/// in the legacy `1.x` form, later ones as the bare major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JavaVersion(u8);

impl JavaVersion {
    pub const VERSION_1_8: JavaVersion = JavaVersion(8);
    pub const VERSION_11: JavaVersion = JavaVersion(11);
    pub const VERSION_17: JavaVersion = JavaVersion(17);
    pub const VERSION_21: JavaVersion = JavaVersion(21);

    const MIN_MAJOR: u8 = 6;

    pub fn new(major: u8) -> Result<Self, Error> {
        if major < Self::MIN_MAJOR {
            return Err(Error::InvalidJavaVersion {
                value: major.to_string(),
            });
        }
        Ok(Self(major))
    }

    pub fn major(self) -> u8 {
        self.0
    }
}

impl FromStr for JavaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidJavaVersion {
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let bare = trimmed.strip_prefix("JavaVersion.").unwrap_or(trimmed);
        let bare = bare.strip_prefix("VERSION_").unwrap_or(bare).replace('_', ".");

        let major = match bare.strip_prefix("1.") {
            Some(legacy) => {
                let minor: u8 = legacy.parse().map_err(|_| invalid())?;
                if minor > 8 {
                    return Err(invalid());
                }
                minor
            }
            None => bare.parse().map_err(|_| invalid())?,
        };

        JavaVersion::new(major).map_err(|_| invalid())
    }
}

impl TryFrom<String> for JavaVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JavaVersion> for String {
    fn from(version: JavaVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 8 {
            write!(f, "1.{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
