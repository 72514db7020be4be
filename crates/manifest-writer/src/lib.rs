//! Resource materialization
//!
//! Writes a [`Resources`] set (relative path to serializable document) under
//! a destination directory, expanding a leading `~` in the destination and
//! creating any missing parent directories.
//!
//! ```no_run
//! use manifest_fs::OsFs;
//! use manifest_writer::{Resources, write_resources};
//!
//! let mut resources = Resources::new();
//! resources.insert("namespaces/cicd.yaml", serde_yaml::from_str::<serde_yaml::Value>("kind: Namespace").unwrap());
//!
//! let written = write_resources(&OsFs, "~/manifest", &resources).unwrap();
//! assert_eq!(written.len(), 1);
//! ```

pub mod destination;
pub mod error;
pub mod format;
pub mod reader;
pub mod resources;
pub mod writer;

pub use destination::Destination;
pub use error::{Error, Result, WriteFailure};
pub use format::Format;
pub use reader::load_resource;
pub use resources::{Resources, WriteResult};
pub use writer::{ResourceWriter, write_resources};
