//! Loader for build descriptors
//!
//! A descriptor lives next to the Gradle module it replaces:
//!
//! ```text
//! wf3_app/
//!   pubspec.yaml
//!   android/
//!     local.properties
//!     app/
//!       droid.toml
//! ```

use crate::descriptor::BuildDescriptor;
use crate::schema::DescriptorFile;
use crate::{Error, Result};
use droid_fs::{ConfigStore, NormalizedPath, io};

/// Largest descriptor the loader will read.
pub const MAX_DESCRIPTOR_SIZE: u64 = 1024 * 1024;

/// File names probed, in order, when a directory is given instead of a file.
pub const DESCRIPTOR_FILE_NAMES: [&str; 4] = ["droid.toml", "droid.json", "droid.yaml", "droid.yml"];

/// Loads [`BuildDescriptor`]s from TOML, JSON or YAML files
pub struct DescriptorLoader {
    store: ConfigStore,
    max_size: u64,
}

impl DescriptorLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
            max_size: MAX_DESCRIPTOR_SIZE,
        }
    }

    /// Loader with a custom size limit.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            store: ConfigStore::new(),
            max_size,
        }
    }

    /// Find the descriptor file inside `dir`.
    pub fn find(dir: &NormalizedPath) -> Option<NormalizedPath> {
        DESCRIPTOR_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(NormalizedPath::is_file)
    }

    /// Load a descriptor from a file, or from a directory containing one of
    /// [`DESCRIPTOR_FILE_NAMES`].
    pub fn load(&self, path: &NormalizedPath) -> Result<BuildDescriptor> {
        let path = if path.is_dir() {
            Self::find(path).ok_or_else(|| Error::DescriptorNotFound {
                path: path.join(DESCRIPTOR_FILE_NAMES[0]).to_native(),
            })?
        } else {
            path.clone()
        };

        if !path.is_file() {
            return Err(Error::DescriptorNotFound {
                path: path.to_native(),
            });
        }

        let size = io::file_size(&path)?;
        if size > self.max_size {
            return Err(Error::DescriptorTooLarge {
                path: path.to_native(),
                size,
                max: self.max_size,
            });
        }

        tracing::debug!(%path, size, "Loading build descriptor");
        let file: DescriptorFile = self.store.load(&path)?;

        let base_dir = path.parent().unwrap_or_else(|| NormalizedPath::new("."));
        BuildDescriptor::from_file(file, base_dir).map_err(|e| Error::InvalidDescriptor {
            path: path.to_native(),
            message: e.to_string(),
        })
    }
}

impl Default for DescriptorLoader {
    fn default() -> Self {
        Self::new()
    }
}
