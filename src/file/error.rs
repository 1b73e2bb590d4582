//! Errors raised while turning bytes into a document tree.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A document could not be loaded.
///
/// These never overlap with navigation errors: a `LoadError` means there
/// is no tree to navigate.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to decompress gzip data - input may be corrupted: {0}")]
    Decompress(#[source] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A mapping key is itself a mapping or sequence, which a path segment
    /// cannot name.
    #[error("unsupported mapping key: {0} keys cannot be addressed by a path")]
    UnsupportedKey(&'static str),
}
