//! Line-oriented search and replace.

use super::copy::copy_file;
use super::error::FileError;
use super::lines::read_lines;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Default read buffer for [`string_replace`], in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Settings for [`string_replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOptions {
    /// Replace at most this many occurrences per line; `None` replaces all.
    pub limit: Option<usize>,
    /// Longest line accepted, in bytes.
    pub buffer_size: usize,
    /// Copy the file to `<name>.bak` before overwriting it.
    pub create_backup: bool,
}

impl Default for ReplaceOptions {
    fn default() -> Self {
        Self {
            limit: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
            create_backup: false,
        }
    }
}

/// Replaces `old` with `new` on every line of `path`.
///
/// The file is streamed line by line into a scratch file, every line
/// written with a `\n` terminator. The original is overwritten from the
/// scratch copy only when at least one line changed, and the number of
/// changed lines is returned.
///
/// # Example
///
/// ```no_run
/// use yamlutils::fileutils::{string_replace, ReplaceOptions};
///
/// let changed = string_replace("notes.txt", "colour", "color", &ReplaceOptions::default()).unwrap();
/// println!("{} lines changed", changed);
/// ```
pub fn string_replace<P: AsRef<Path>>(
    path: P,
    old: &str,
    new: &str,
    options: &ReplaceOptions,
) -> Result<usize, FileError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut scratch = tempfile::Builder::new()
        .prefix(&format!("{}-", name))
        .tempfile()
        .map_err(|source| FileError::io(env::temp_dir(), source))?;

    let scratch_path = scratch.path().to_path_buf();
    let mut changed = 0;
    {
        let mut writer = BufWriter::new(scratch.as_file_mut());
        for line in read_lines(path, options.buffer_size)? {
            let line = line?;
            let replaced = match options.limit {
                Some(n) => line.replacen(old, new, n),
                None => line.replace(old, new),
            };
            if replaced != line {
                changed += 1;
            }
            writeln!(writer, "{}", replaced)
                .map_err(|source| FileError::io(&scratch_path, source))?;
        }
        writer
            .flush()
            .map_err(|source| FileError::io(&scratch_path, source))?;
    }

    if changed > 0 {
        if options.create_backup {
            create_backup(path)?;
        }
        copy_file(scratch.path(), path)?;
    }

    debug!(path = %path.display(), changed, "replaced lines");
    Ok(changed)
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<(), FileError> {
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, &backup_path).map_err(|source| FileError::io(backup_path, source))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        fs::write(&path, "a a a\nb\na\n").unwrap();

        let options = ReplaceOptions {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(string_replace(&path, "a", "x", &options).unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x x a\nb\nx\n");
    }

    #[test]
    fn test_zero_limit_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        fs::write(&path, "a\n").unwrap();

        let options = ReplaceOptions {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(string_replace(&path, "a", "x", &options).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
    }

    #[test]
    fn test_backup_created_only_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        let backup = dir.path().join("text.txt.bak");
        fs::write(&path, "hello\n").unwrap();

        let options = ReplaceOptions {
            create_backup: true,
            ..Default::default()
        };
        assert_eq!(string_replace(&path, "absent", "x", &options).unwrap(), 0);
        assert!(!backup.exists());

        assert_eq!(string_replace(&path, "hello", "bye", &options).unwrap(), 1);
        assert_eq!(fs::read_to_string(&backup).unwrap(), "hello\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "bye\n");
    }
}
