use super::error::FileError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Iterator over the lines of a file, without line terminators.
///
/// The stream ends after the first error.
#[derive(Debug)]
pub struct Lines {
    reader: BufReader<File>,
    path: PathBuf,
    buffer_size: usize,
    line: usize,
    done: bool,
}

/// Opens `path` for line-by-line reading.
///
/// A line longer than `buffer_size` bytes (terminator excluded) is reported
/// as [`FileError::BufferTooSmall`]; at most `buffer_size + 2` bytes of a
/// line are held in memory. Both `\n` and `\r\n` endings are stripped.
pub fn read_lines<P: AsRef<Path>>(path: P, buffer_size: usize) -> Result<Lines, FileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileError::io(path, source))?;
    Ok(Lines {
        reader: BufReader::with_capacity(buffer_size.max(16), file),
        path: path.to_path_buf(),
        buffer_size,
        line: 0,
        done: false,
    })
}

impl Iterator for Lines {
    type Item = Result<String, FileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Room for the longest accepted line plus `\r\n`.
        let limit = (self.buffer_size as u64).saturating_add(2);
        let mut buf = Vec::new();
        match (&mut self.reader).take(limit).read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line += 1;
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                if buf.len() > self.buffer_size {
                    self.done = true;
                    return Some(Err(FileError::BufferTooSmall {
                        path: self.path.clone(),
                        line: self.line,
                        buffer_size: self.buffer_size,
                    }));
                }
                match String::from_utf8(buf) {
                    Ok(line) => Some(Ok(line)),
                    Err(err) => {
                        self.done = true;
                        Some(Err(FileError::io(
                            self.path.clone(),
                            io::Error::new(io::ErrorKind::InvalidData, err),
                        )))
                    }
                }
            }
            Err(source) => {
                self.done = true;
                Some(Err(FileError::io(self.path.clone(), source)))
            }
        }
    }
}
