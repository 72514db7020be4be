//! Forward-slash path handling for resource targets

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path joined and stored with forward slashes.
///
/// Resource keys are always forward-slash separated. Joining them onto a
/// destination root is plain string concatenation: a key is never resolved
/// against the working directory, and a key with a leading `/` does not
/// replace the root the way [`Path::join`] would.
///
/// Backslashes are only treated as separators on Windows; elsewhere they are
/// ordinary file name characters and are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: to_forward_slashes(&path.as_ref().to_string_lossy()),
        }
    }

    /// Like [`NormalizedPath::new`], but refuses paths that are not valid
    /// UTF-8 instead of replacing the offending bytes.
    pub fn try_new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.to_str() {
            Some(s) => Ok(Self {
                inner: to_forward_slashes(s),
            }),
            None => Err(Error::NonUtf8Path {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Get the internal string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        if cfg!(windows) {
            PathBuf::from(self.inner.replace('/', "\\"))
        } else {
            PathBuf::from(&self.inner)
        }
    }

    /// Append a relative segment, inserting a single `/` unless the base
    /// already ends with one.
    pub fn join(&self, segment: &str) -> Self {
        let segment = to_forward_slashes(segment);
        let joined = if self.inner.is_empty() || self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            None => None,
        }
    }

    /// Get the file name component.
    ///
    /// Returns `None` when the path ends with a separator or is empty.
    pub fn file_name(&self) -> Option<&str> {
        match self.inner.rsplit('/').next() {
            Some("") | None => None,
            Some(name) => Some(name),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || self.to_native().is_absolute()
    }
}

fn to_forward_slashes(s: &str) -> String {
    if cfg!(windows) {
        s.replace('\\', "/")
    } else {
        s.to_string()
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
    fn join_inserts_single_separator() {
        let base = NormalizedPath::new("/tmp/manifest");
        assert_eq!(base.join("test/myfile.yaml").as_str(), "/tmp/manifest/test/myfile.yaml");
    }

    #[test]
    fn join_onto_root_does_not_double_separator() {
        let base = NormalizedPath::new("/");
        assert_eq!(base.join("test/myfile.yaml").as_str(), "/test/myfile.yaml");
    }

    #[test]
    fn join_keeps_leading_slash_key_under_base() {
        let base = NormalizedPath::new("out");
        assert_eq!(base.join("/abs.yaml").as_str(), "out//abs.yaml");
    }

    #[test]
    fn parent_of_top_level_file_is_root() {
        let path = NormalizedPath::new("/myfile.yaml");
        assert_eq!(path.parent().unwrap().as_str(), "/");
    }

    #[test]
    fn parent_of_bare_name_is_none() {
        assert!(NormalizedPath::new("myfile.yaml").parent().is_none());
    }

    #[test]
    fn file_name_of_directory_path_is_none() {
        assert_eq!(NormalizedPath::new("config/").file_name(), None);
    }

    #[test]
    fn extension_ignores_dotfiles() {
        assert_eq!(NormalizedPath::new("a/.env").extension(), None);
        assert_eq!(NormalizedPath::new("a/b.yml").extension(), Some("yml"));
    }

    #[cfg(unix)]
    #[test]
    fn try_new_rejects_invalid_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = Path::new(OsStr::from_bytes(b"/tmp/h\xffome"));
        match NormalizedPath::try_new(raw) {
            Err(Error::NonUtf8Path { path }) => assert_eq!(path, raw),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(NormalizedPath::try_new("/tmp/home").unwrap().as_str(), "/tmp/home");
    }

    #[cfg(unix)]
    #[test]
    fn backslash_is_kept_on_unix() {
        let path = NormalizedPath::new("dir\\name");
        assert_eq!(path.as_str(), "dir\\name");
    }
}
