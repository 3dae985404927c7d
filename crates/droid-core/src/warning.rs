//! Non-fatal findings surfaced alongside a successful resolution

use std::fmt;

use serde::Serialize;

/// A condition worth reporting that does not block resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Release builds are signed with a non-production profile
    PlaceholderSigning { profile: String },

    /// `applicationId` and `namespace` drifted apart
    ApplicationIdDiffersFromNamespace {
        namespace: String,
        application_id: String,
    },

    TargetSdkAboveCompileSdk { target_sdk: u32, compile_sdk: u32 },

    /// Shrinking is on but no rules file is listed
    MinifyWithoutRules,
}

impl Warning {
    /// Descriptor field the warning is about.
    pub fn field(&self) -> &'static str {
        match self {
            Warning::PlaceholderSigning { .. } => "signingConfig",
            Warning::ApplicationIdDiffersFromNamespace { .. } => "applicationId",
            Warning::TargetSdkAboveCompileSdk { .. } => "targetSdk",
            Warning::MinifyWithoutRules => "release.minifyEnabled",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::PlaceholderSigning { profile } => write!(
                f,
                "release builds are signed with the placeholder `{profile}` profile; configure a real signing profile before publishing"
            ),
            Warning::ApplicationIdDiffersFromNamespace {
                namespace,
                application_id,
            } => write!(
                f,
                "applicationId `{application_id}` differs from namespace `{namespace}`"
            ),
            Warning::TargetSdkAboveCompileSdk {
                target_sdk,
                compile_sdk,
            } => write!(
                f,
                "targetSdk {target_sdk} is above compileSdk {compile_sdk}"
            ),
            Warning::MinifyWithoutRules => {
                write!(f, "minifyEnabled is set but no proguardFiles are listed")
            }
        }
    }
}
