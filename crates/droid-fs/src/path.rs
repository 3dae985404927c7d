//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Descriptors written on Windows may carry backslashes in relative paths
/// such as `flutter.source`; everything is stored with forward slashes and
/// converted to the platform-native form only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() {
            segment_normalized
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Resolve `relative` against this path as a base directory.
    ///
    /// Resolution is purely lexical: `.` segments are dropped and `..`
    /// pops the previous segment, so `app/../..` relative to `/p/android`
    /// yields `/p`. An absolute `relative` replaces the base entirely.
    pub fn resolve(&self, relative: &str) -> Self {
        let relative = relative.replace('\\', "/");
        let combined = if split_root(&relative).0.is_some() {
            relative
        } else {
            self.join(&relative).inner
        };
        Self {
            inner: clean(&combined),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Resolve symlinks and make the path absolute.
    ///
    /// On Windows the result keeps the plain `C:\` form rather than the
    /// `\\?\` verbatim prefix.
    pub fn canonicalize(&self) -> crate::Result<PathBuf> {
        let native = self.to_native();
        dunce::canonicalize(&native).map_err(|e| crate::Error::io(native, e))
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

/// Split a forward-slash path into its root (`/`, `C:/`) and the remainder.
fn split_root(path: &str) -> (Option<String>, &str) {
    if let Some(rest) = path.strip_prefix('/') {
        return (Some("/".to_string()), rest);
    }
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let drive = format!("{}/", &path[..2]);
        let rest = path[2..].trim_start_matches('/');
        return (Some(drive), rest);
    }
    (None, path)
}

fn clean(path: &str) -> String {
    let (root, rest) = split_root(path);
    let mut stack: Vec<&str> = Vec::new();

    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.last().is_some_and(|last| *last != "..") {
                    stack.pop();
                } else if root.is_none() {
                    // Relative paths keep leading `..`; roots absorb them.
                    stack.push("..");
                }
            }
            other => stack.push(other),
        }
    }

    let body = stack.join("/");
    match root {
        Some(root) => format!("{root}{body}"),
        None if body.is_empty() => ".".to_string(),
        None => body,
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_walks_up_from_base() {
        let base = NormalizedPath::new("/work/wf3_app/android/app");
        assert_eq!(base.resolve("../..").as_str(), "/work/wf3_app");
    }

    #[test]
    fn resolve_absolute_replaces_base() {
        let base = NormalizedPath::new("/work/app");
        assert_eq!(base.resolve("/opt/flutter/project").as_str(), "/opt/flutter/project");
    }

    #[test]
    fn resolve_keeps_leading_parent_segments_for_relative_base() {
        let base = NormalizedPath::new("app");
        assert_eq!(base.resolve("../../shared").as_str(), "../shared");
    }

    #[test]
    fn resolve_does_not_escape_root() {
        let base = NormalizedPath::new("/a");
        assert_eq!(base.resolve("../../..").as_str(), "/");
    }

    #[test]
    fn resolve_handles_backslashes_and_drive_letters() {
        let base = NormalizedPath::new("C:\\src\\wf3\\android\\app");
        assert_eq!(base.resolve("..\\..").as_str(), "C:/src/wf3");
    }

    #[test]
    fn resolve_collapses_dots_and_separators() {
        let base = NormalizedPath::new("a");
        assert_eq!(base.resolve("./b//c/..").as_str(), "a/b");
        assert_eq!(base.resolve("..").as_str(), ".");
    }

    #[test]
    fn extension_and_file_name() {
        let path = NormalizedPath::new("android/app/build.droid.toml");
        assert_eq!(path.file_name(), Some("build.droid.toml"));
        assert_eq!(path.extension(), Some("toml"));
        assert_eq!(NormalizedPath::new(".hidden").extension(), None);
    }
}
