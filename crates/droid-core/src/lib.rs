//! Build configuration resolution for droid-config
//!
//! Turns a [`BuildDescriptor`](droid_meta::BuildDescriptor) plus the values
//! the Flutter wrapper injects into a validated [`ResolvedConfig`] for the
//! external packager.
//!
//! # Example
//!
//! ```ignore
//! use droid_core::{ExternalValues, resolve};
//! use droid_fs::NormalizedPath;
//! use droid_meta::DescriptorLoader;
//!
//! let descriptor = DescriptorLoader::new().load(&NormalizedPath::new("android/app/droid.toml"))?;
//! let external = ExternalValues::new()
//!     .compile_sdk_version(34)
//!     .min_sdk_version(21)
//!     .target_sdk_version(34)
//!     .version_code(1)
//!     .version_name("1.0.0");
//!
//! let resolution = resolve(&descriptor, &external)?;
//! for warning in &resolution.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! println!("{}", resolution.config.to_json()?);
//! ```

pub mod config;
pub mod error;
pub mod warning;

pub use config::{
    ConfigResolver, ExternalValues, ExternalValuesResolver, GLOBAL_PROPERTIES, LOCAL_PROPERTIES,
    MAX_VERSION_CODE, Resolution, ResolveOptions, ResolvedConfig, ResolvedSigning,
    parse_properties, resolve,
};
pub use error::{Error, Result};
pub use warning::Warning;
