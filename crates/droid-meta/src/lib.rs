//! Build descriptor schema and loading for droid-config.
//!
//! A descriptor carries the declarative part of an Android wrapper build:
//! identifiers, plugin order, SDK levels, Java levels, signing reference and
//! the location of the Flutter project. Values the wrapper tool injects at
//! build time appear as [`Injectable::Placeholder`]s.

pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod java;
pub mod loader;
pub mod plugins;
pub mod schema;
pub mod value;

pub use descriptor::{
    BuildDescriptor, DEBUG_SIGNING_PROFILE, DescriptorBuilder, JavaCompatibility, SdkLevels,
    VersionInfo,
};
pub use error::{Error, Result};
pub use identifier::{IdentifierIssue, validate_package_name};
pub use java::JavaVersion;
pub use loader::{DESCRIPTOR_FILE_NAMES, DescriptorLoader, MAX_DESCRIPTOR_SIZE};
pub use plugins::{HOST_INTEGRATION_PLUGIN, PluginRegistry};
pub use schema::{DescriptorFile, FlutterSection, ReleaseOptions, SigningProfile};
pub use value::{ExternalKey, Injectable, RawScalar};
