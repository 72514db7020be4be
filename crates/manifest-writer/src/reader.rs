//! Reading materialized resources back

use std::path::Path;

use serde::de::DeserializeOwned;

use manifest_fs::{Filesystem, NormalizedPath};

use crate::{Error, Format, Result};

/// Load and parse a document, choosing the format from its extension.
pub fn load_resource<F, T>(fs: &F, path: &Path) -> Result<T>
where
    F: Filesystem + ?Sized,
    T: DeserializeOwned,
{
    let format = Format::from_path(&NormalizedPath::new(path));
    let bytes = fs.read_file(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|e| Error::Deserialize {
        path: path.to_path_buf(),
        format: format.name().into(),
        message: e.to_string(),
    })?;
    format.deserialize(path, &content)
}
