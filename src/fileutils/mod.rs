//! File related utilities: directory listings, numeric ordering of
//! siblings, whole-file copy, line reading and line-oriented replace.

pub mod copy;
pub mod error;
pub mod lines;
pub mod listing;
pub mod replace;

pub use copy::copy_file;
pub use error::FileError;
pub use lines::{read_lines, Lines};
pub use listing::{
    list_dirs, list_files, list_files_vec, numeric_basename_cmp, sort_same_dir_files_numerically,
    FileList, ListOptions,
};
pub use replace::{string_replace, ReplaceOptions, DEFAULT_BUFFER_SIZE};
