//! Error types for droid-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] droid_fs::Error),

    #[error("Descriptor not found at {path}")]
    DescriptorNotFound { path: PathBuf },

    #[error("Invalid descriptor at {path}: {message}")]
    InvalidDescriptor { path: PathBuf, message: String },

    #[error("Descriptor too large: {path} is {size} bytes (max {max})")]
    DescriptorTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid value for `{field}`: {message}")]
    InvalidField { field: &'static str, message: String },

    #[error("Missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("Invalid Java version: {value}")]
    InvalidJavaVersion { value: String },

    #[error("Unknown injection key: {key}")]
    UnknownExternalKey { key: String },
}
