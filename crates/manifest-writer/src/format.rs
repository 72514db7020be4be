//! Document serialization formats

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use manifest_fs::NormalizedPath;

use crate::{Error, Result};

/// Textual format a document is rendered in.
///
/// Picked from the target's extension: `.json` renders JSON, everything else
/// (including `.yaml`, `.yml` and no extension) renders YAML. Both outputs
/// are deterministic for equal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &NormalizedPath) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    /// Render `value`; `path` is only used for error reporting.
    pub fn serialize<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<String> {
        let rendered = match self {
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(value)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| Error::Serialize {
            path: path.to_path_buf(),
            format: self.name().into(),
            message,
        })
    }

    pub fn deserialize<T: DeserializeOwned>(&self, path: &Path, content: &str) -> Result<T> {
        let parsed = match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::Deserialize {
            path: path.to_path_buf(),
            format: self.name().into(),
            message,
        })
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
