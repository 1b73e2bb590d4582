//! Error types for path navigation.

use thiserror::Error;

/// Why a navigation stopped before consuming the whole path.
///
/// Compare kinds directly (`err.kind() == ErrorKind::MapKeyNotFound`)
/// rather than matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path continues past a scalar.
    ExtraElementsInPath,
    /// A mapping has no entry for the segment.
    MapKeyNotFound,
    /// A sequence was reached and the segment is not an integer.
    NotAnIndex,
    /// A sequence was reached and the integer is negative or past the end.
    InvalidIndex,
}

impl ErrorKind {
    /// Process exit code used by the command line front end.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::ExtraElementsInPath => 3,
            ErrorKind::MapKeyNotFound => 4,
            ErrorKind::NotAnIndex => 5,
            ErrorKind::InvalidIndex => 6,
        }
    }
}

/// A classified navigation failure with the context needed for a precise
/// diagnostic.
///
/// `position` is the 0-based index of the failing segment in the original
/// path and `path` is the original path joined with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigateError {
    #[error("extra elements in path: '{remaining}' continues past a scalar at segment {position} of path {path}")]
    ExtraElementsInPath {
        remaining: String,
        position: usize,
        path: String,
    },

    #[error("map key not found: key '{key}' not found at segment {position} of path {path}")]
    MapKeyNotFound {
        key: String,
        position: usize,
        path: String,
    },

    #[error("not an index: '{segment}' at segment {position} of path {path}")]
    NotAnIndex {
        segment: String,
        position: usize,
        path: String,
    },

    #[error("invalid index: index {index} out of range (length {len}) at segment {position} of path {path}")]
    InvalidIndex {
        index: i64,
        len: usize,
        position: usize,
        path: String,
    },
}

impl NavigateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NavigateError::ExtraElementsInPath { .. } => ErrorKind::ExtraElementsInPath,
            NavigateError::MapKeyNotFound { .. } => ErrorKind::MapKeyNotFound,
            NavigateError::NotAnIndex { .. } => ErrorKind::NotAnIndex,
            NavigateError::InvalidIndex { .. } => ErrorKind::InvalidIndex,
        }
    }

    /// Index of the failing segment in the original path.
    pub fn position(&self) -> usize {
        match self {
            NavigateError::ExtraElementsInPath { position, .. }
            | NavigateError::MapKeyNotFound { position, .. }
            | NavigateError::NotAnIndex { position, .. }
            | NavigateError::InvalidIndex { position, .. } => *position,
        }
    }
}
