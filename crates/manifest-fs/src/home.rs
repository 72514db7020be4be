//! Home-directory shorthand expansion
//!
//! A destination beginning with `~` has that single character replaced by the
//! home directory. Everything after it, separator included, is kept verbatim:
//! `~` becomes `<home>` and `~/x` becomes `<home>/x`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable holding the home directory.
pub const HOME_ENV: &str = "HOME";

const HOME_MARKER: char = '~';

/// Expand a leading `~` using the home directory from the environment.
///
/// The environment is only consulted when `path` starts with `~`.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if !path.starts_with(HOME_MARKER) {
        return Ok(PathBuf::from(path));
    }
    let home = home_dir()?;
    Ok(expand_home_with(path, &home))
}

/// Expand a leading `~` using an explicit home directory.
pub fn expand_home_with(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix(HOME_MARKER) {
        Some(rest) => {
            let mut expanded = OsString::from(home.as_os_str());
            expanded.push(rest);
            PathBuf::from(expanded)
        }
        None => PathBuf::from(path),
    }
}

/// Resolve the home directory.
///
/// `HOME` wins when set and non-empty; otherwise the platform lookup from
/// `dirs` is used.
pub fn home_dir() -> Result<PathBuf> {
    home_from(std::env::var_os(HOME_ENV))
}

/// Resolve the home directory from an already-read `HOME` value.
pub fn home_from(env_home: Option<OsString>) -> Result<PathBuf> {
    match env_home {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => {
            let home = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
            tracing::warn!(home = %home.display(), "{} is not set, using platform home directory", HOME_ENV);
            Ok(home)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_marker_is_exactly_home() {
        let expanded = expand_home_with("~", Path::new("/home/dev"));
        assert_eq!(expanded, PathBuf::from("/home/dev"));
    }

    #[test]
    fn marker_with_separator_keeps_remainder() {
        let expanded = expand_home_with("~/manifest", Path::new("/home/dev"));
        assert_eq!(expanded, PathBuf::from("/home/dev/manifest"));
    }

    #[test]
    fn marker_only_replaced_at_start() {
        let expanded = expand_home_with("/srv/~/manifest", Path::new("/home/dev"));
        assert_eq!(expanded, PathBuf::from("/srv/~/manifest"));
    }

    #[test]
    fn home_from_prefers_environment_value() {
        let home = home_from(Some(OsString::from("/home/gitops"))).unwrap();
        assert_eq!(home, PathBuf::from("/home/gitops"));
    }

    #[test]
    fn home_from_empty_value_falls_back_to_platform() {
        for missing in [None, Some(OsString::new())] {
            match (home_from(missing), dirs::home_dir()) {
                (Ok(home), Some(expected)) => assert_eq!(home, expected),
                (Err(Error::HomeDirectoryNotFound), None) => {}
                (got, expected) => panic!("got {got:?}, platform lookup gave {expected:?}"),
            }
        }
    }

    #[test]
    fn path_without_marker_skips_environment() {
        assert_eq!(expand_home("relative/out").unwrap(), PathBuf::from("relative/out"));
    }
}
