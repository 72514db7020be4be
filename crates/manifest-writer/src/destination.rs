//! Destination root resolution

use std::path::Path;
use std::str::FromStr;

use manifest_fs::{NormalizedPath, home};

use crate::{Error, Result};

/// Where a resource set is written.
///
/// Holds the path exactly as given. A leading `~` is expanded once, when the
/// destination is resolved; any other path is used as-is, relative paths
/// staying relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    raw: String,
}

impl Destination {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(Error::EmptyDestination);
        }
        Ok(Self { raw })
    }

    pub fn is_home_relative(&self) -> bool {
        self.raw.starts_with('~')
    }

    /// Resolve against the home directory from the environment.
    ///
    /// Fails when the expanded root is not valid UTF-8, since keys are
    /// joined onto it as text.
    pub fn resolve(&self) -> Result<NormalizedPath> {
        Ok(NormalizedPath::try_new(home::expand_home(&self.raw)?)?)
    }

    /// Resolve against an explicit home directory.
    pub fn resolve_with_home(&self, home: &Path) -> Result<NormalizedPath> {
        Ok(NormalizedPath::try_new(home::expand_home_with(&self.raw, home))?)
    }
}

impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
