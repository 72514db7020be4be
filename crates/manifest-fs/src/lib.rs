//! Filesystem abstraction for manifest materialization
//!
//! Provides the [`Filesystem`] capability trait with an operating-system
//! implementation ([`OsFs`]) and an in-memory one ([`MemoryFs`]), together
//! with forward-slash path handling and home-directory expansion.

pub mod error;
pub mod filesystem;
pub mod home;
pub mod io;
pub mod memory;
pub mod os;
pub mod path;

pub use error::{Error, Result};
pub use filesystem::Filesystem;
pub use home::{expand_home, expand_home_with};
pub use memory::MemoryFs;
pub use os::OsFs;
pub use path::NormalizedPath;
