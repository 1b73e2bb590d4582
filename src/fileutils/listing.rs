//! Streaming directory listings.
//!
//! Listings are produced lazily by [`FileList`], one path at a time, walking
//! depth-first. Within a directory, entries come in byte order of their
//! names, or in numeric order of their basenames when requested.

use super::error::FileError;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;
use tracing::{debug, trace};

/// How a listing walks and filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Do not yield directories (their contents are still walked when
    /// `recursive` is set).
    pub ignore_dirs: bool,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Order siblings with [`numeric_basename_cmp`] instead of by name.
    pub numeric_sort: bool,
    /// Reverse the sibling order.
    pub reverse: bool,
}

/// Iterator over the entries of a listing.
///
/// A failure on one entry is yielded as an `Err` and the walk continues
/// with the next entry.
#[derive(Debug)]
pub struct FileList {
    stack: Vec<vec::IntoIter<PathBuf>>,
    /// Yielded before anything else (the root of a directory listing).
    head: Option<PathBuf>,
    /// Directory yielded last, whose children are pushed on the next call.
    expand: Option<PathBuf>,
    options: ListOptions,
    dirs_only: bool,
}

impl FileList {
    fn new(dir: &Path, options: ListOptions, dirs_only: bool) -> Result<Self, FileError> {
        let metadata = fs::metadata(dir).map_err(|source| FileError::io(dir, source))?;
        if !metadata.is_dir() {
            return Err(FileError::NotADirectory(dir.to_path_buf()));
        }
        debug!(dir = %dir.display(), ?options, dirs_only, "listing directory");

        let children = read_sorted(dir, &options)?;
        Ok(Self {
            stack: vec![children.into_iter()],
            head: dirs_only.then(|| dir.to_path_buf()),
            expand: None,
            options,
            dirs_only,
        })
    }

    fn push_children(&mut self, dir: &Path) -> Result<(), FileError> {
        let children = read_sorted(dir, &self.options)?;
        self.stack.push(children.into_iter());
        Ok(())
    }
}

impl Iterator for FileList {
    type Item = Result<PathBuf, FileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.head.take() {
            return Some(Ok(root));
        }
        if let Some(dir) = self.expand.take() {
            if let Err(err) = self.push_children(&dir) {
                return Some(Err(err));
            }
        }

        loop {
            let entries = self.stack.last_mut()?;
            let Some(path) = entries.next() else {
                self.stack.pop();
                continue;
            };
            trace!(path = %path.display(), "visiting");

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(source) => return Some(Err(FileError::io(path, source))),
            };

            if metadata.is_dir() {
                if self.options.ignore_dirs {
                    if self.options.recursive {
                        if let Err(err) = self.push_children(&path) {
                            return Some(Err(err));
                        }
                    }
                    continue;
                }
                if self.options.recursive {
                    self.expand = Some(path.clone());
                }
                return Some(Ok(path));
            }

            if !self.dirs_only {
                return Some(Ok(path));
            }
        }
    }
}

/// Lists the entries of `dir`.
///
/// Directories are yielded before their own contents. Hidden entries are
/// included and symbolic links are followed when deciding whether an entry
/// is a directory.
///
/// # Errors
///
/// Fails up front when `dir` cannot be read or is not a directory. Errors on
/// individual entries are yielded by the iterator.
///
/// # Example
///
/// ```no_run
/// use yamlutils::fileutils::{list_files, ListOptions};
///
/// let options = ListOptions { recursive: true, numeric_sort: true, ..Default::default() };
/// for entry in list_files("chapters", options).unwrap() {
///     println!("{}", entry.unwrap().display());
/// }
/// ```
pub fn list_files<P: AsRef<Path>>(dir: P, options: ListOptions) -> Result<FileList, FileError> {
    FileList::new(dir.as_ref(), options, false)
}

/// Lists the entries of `dir` into a vector, stopping at the first error.
pub fn list_files_vec<P: AsRef<Path>>(
    dir: P,
    options: ListOptions,
) -> Result<Vec<PathBuf>, FileError> {
    list_files(dir, options)?.collect()
}

/// Lists `dir` itself followed by every directory below it.
pub fn list_dirs<P: AsRef<Path>>(
    dir: P,
    numeric_sort: bool,
    reverse: bool,
) -> Result<FileList, FileError> {
    let options = ListOptions {
        ignore_dirs: false,
        recursive: true,
        numeric_sort,
        reverse,
    };
    FileList::new(dir.as_ref(), options, true)
}

fn read_sorted(dir: &Path, options: &ListOptions) -> Result<Vec<PathBuf>, FileError> {
    let mut children = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|source| FileError::io(dir, source))?;

    if options.numeric_sort {
        children = sort_same_dir_files_numerically(children, options.reverse);
    } else {
        children.sort();
        if options.reverse {
            children.reverse();
        }
    }
    Ok(children)
}

/// Compares two paths by basename.
///
/// When both basenames parse as integers they compare numerically. When
/// either one does not, the pair compares by text. With a mix of numeric
/// and non-numeric names this is not a total order (`9 < 10`, `10 < 1a`,
/// `1a < 9`).
pub fn numeric_basename_cmp(a: &Path, b: &Path) -> Ordering {
    let base_a = basename(a);
    let base_b = basename(b);
    match (base_a.parse::<i64>(), base_b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => base_a.cmp(&base_b),
    }
}

/// Sorts files of one directory by [`numeric_basename_cmp`].
///
/// Each file is inserted before the first already placed file that
/// compares greater (less when `reverse`), so equal names keep their input
/// order and mixed numeric/non-numeric names still get a deterministic
/// order.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use yamlutils::fileutils::sort_same_dir_files_numerically;
///
/// let files = ["d/10", "d/9", "d/100"].map(PathBuf::from).to_vec();
/// let sorted = sort_same_dir_files_numerically(files, false);
/// assert_eq!(sorted, ["d/9", "d/10", "d/100"].map(PathBuf::from).to_vec());
/// ```
pub fn sort_same_dir_files_numerically(files: Vec<PathBuf>, reverse: bool) -> Vec<PathBuf> {
    let wanted = if reverse {
        Ordering::Greater
    } else {
        Ordering::Less
    };

    let mut sorted: Vec<PathBuf> = Vec::with_capacity(files.len());
    for file in files {
        let at = sorted
            .iter()
            .position(|placed| numeric_basename_cmp(&file, placed) == wanted)
            .unwrap_or(sorted.len());
        sorted.insert(at, file);
    }
    sorted
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
