//! Error type shared by the file utilities.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("provided dir is not a dir: '{}'", .0.display())]
    NotADirectory(PathBuf),

    #[error("'{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line did not fit in the configured read buffer.
    #[error("'{}': buffer size too small, line {line} is longer than {buffer_size} bytes", path.display())]
    BufferTooSmall {
        path: PathBuf,
        line: usize,
        buffer_size: usize,
    },
}

impl FileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FileError::Io {
            path: path.into(),
            source,
        }
    }
}
