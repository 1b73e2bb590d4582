//! Document loading from files, readers and strings.
//!
//! YAML is the default format. Files whose name ends in `.json` (before an
//! optional `.gz`) are parsed as JSON, and gzip input is decompressed
//! transparently.

pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{load_file, load_reader, load_stdin, load_str};
