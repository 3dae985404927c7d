//! Registry of Gradle plugin ids known to the wrapper build

use std::collections::{HashMap, HashSet};

/// The Flutter Gradle plugin. The Flutter tooling requires it to be
/// applied after every other plugin.
pub const HOST_INTEGRATION_PLUGIN: &str = "dev.flutter.flutter-gradle-plugin";

/// Known plugin ids and their legacy aliases
pub struct PluginRegistry {
    known: HashSet<&'static str>,
    aliases: HashMap<&'static str, &'static str>,
}

impl PluginRegistry {
    pub fn with_builtins() -> Self {
        let known = [
            "com.android.application",
            "com.android.library",
            "org.jetbrains.kotlin.android",
            "org.jetbrains.kotlin.kapt",
            "org.jetbrains.kotlin.plugin.parcelize",
            "com.google.gms.google-services",
            "com.google.firebase.crashlytics",
            HOST_INTEGRATION_PLUGIN,
        ]
        .into_iter()
        .collect();

        let aliases = [
            ("kotlin-android", "org.jetbrains.kotlin.android"),
            ("kotlin-kapt", "org.jetbrains.kotlin.kapt"),
            ("kotlin-parcelize", "org.jetbrains.kotlin.plugin.parcelize"),
        ]
        .into_iter()
        .collect();

        Self { known, aliases }
    }

    /// Map a legacy alias to its plugin id; other ids pass through unchanged.
    pub fn canonical<'a>(&self, id: &'a str) -> &'a str {
        self.aliases.get(id).copied().unwrap_or(id)
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.known.contains(self.canonical(id))
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
