//! yamlutils - path navigation for parsed YAML/JSON trees, plus small file
//! utilities (listing, numeric sort, copy, line replace).
//!
//! # Example
//!
//! ```
//! use yamlutils::file::load_str;
//! use yamlutils::navigate::ErrorKind;
//!
//! let doc = load_str("hello:\n  - one\n  - two\n").unwrap();
//! assert_eq!(doc.get_string(false, &["hello", "1"]).unwrap(), "two");
//!
//! let err = doc.get_string(false, &["hello", "x"]).unwrap_err();
//! assert_eq!(err.kind(), Some(ErrorKind::NotAnIndex));
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod fileutils;
pub mod navigate;
