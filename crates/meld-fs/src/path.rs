//! Forward-slash-normalized paths for hub content

use std::path::{Path, PathBuf};

/// A path normalized to forward slashes.
///
/// Generated files are addressed by hub-relative paths that must render
/// identically on every platform. All paths are stored with forward slashes
/// internally and converted to the platform-native form only at I/O
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HubPath {
    inner: String,
}

impl HubPath {
    /// Create a new HubPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: raw.replace('\\', "/"),
        }
    }

    /// The normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native `PathBuf` for I/O.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join a path segment onto this path.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let segment = segment.trim_start_matches("./");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self {
            inner: joined.trim_end_matches('/').to_string(),
        }
    }

    /// The final path component, if any.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Whether this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Whether this path is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Whether this path is a regular file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for HubPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for HubPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for HubPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for HubPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalizes_backslashes() {
        let path = HubPath::new("hub\\agents\\claude-code");
        assert_eq!(path.as_str(), "hub/agents/claude-code");
    }

    #[test]
    fn test_join() {
        let path = HubPath::new("/tmp/hub");
        assert_eq!(path.join("context").as_str(), "/tmp/hub/context");
        assert_eq!(path.join("./context/").as_str(), "/tmp/hub/context");
    }

    #[test]
    fn test_join_trailing_slash_base() {
        let path = HubPath::new("/tmp/hub/");
        assert_eq!(path.join("meld.jsonc").as_str(), "/tmp/hub/meld.jsonc");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(HubPath::new("/tmp/hub/CLAUDE.md").file_name(), Some("CLAUDE.md"));
        assert_eq!(HubPath::new("/tmp/hub/").file_name(), Some("hub"));
    }

    #[test]
    fn test_display_uses_forward_slashes() {
        let path = HubPath::new("a\\b");
        assert_eq!(path.to_string(), "a/b");
    }
}
