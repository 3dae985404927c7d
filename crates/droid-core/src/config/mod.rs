//! Configuration resolution
//!
//! Resolution takes two inputs:
//!
//! 1. **The descriptor** - the declarative `android/app` build settings
//! 2. **External values** - what the Flutter wrapper injects, layered from
//!    (later sources override earlier):
//!    - Global defaults - `<config_dir>/droid/external.properties`
//!    - `local.properties` next to the Android project
//!    - Explicit properties files
//!    - `KEY=VALUE` overrides
//!
//! and produces a [`ResolvedConfig`] together with any non-fatal
//! [`Warning`](crate::Warning)s.

mod external;
mod properties;
mod resolved;
mod resolver;

pub use external::{ExternalValues, ExternalValuesResolver, GLOBAL_PROPERTIES, LOCAL_PROPERTIES};
pub use properties::parse_properties;
pub use resolved::{Resolution, ResolvedConfig, ResolvedSigning};
pub use resolver::{ConfigResolver, MAX_VERSION_CODE, ResolveOptions, resolve};
