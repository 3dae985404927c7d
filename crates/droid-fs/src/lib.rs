//! Filesystem layer for droid-config
//!
//! Provides normalized path handling, format-agnostic descriptor loading
//! and safe output writes.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
