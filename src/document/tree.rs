//! A loaded document and the queries it answers.
//!
//! [`Document`] owns a parsed tree together with the text it came from. It
//! is the handle the command line front end works with: load once, then
//! query by `/`-separated path as often as needed.
//!
//! # Example
//!
//! ```
//! use yamlutils::document::tree::Document;
//!
//! let doc: Document = "server:\n  ports: [80, 443]\n".parse().unwrap();
//!
//! assert_eq!(doc.get_string(false, &["server", "ports", "1"]).unwrap(), "443");
//! assert!(doc.query("server/ports").unwrap().is_sequence());
//! ```

use super::node::YamlValue;
use super::parser::parse_yaml;
use crate::file::LoadError;
use crate::navigate::{navigate, render_scalar, NavigateError, Navigation, RenderError};
use serde::de::DeserializeOwned;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors from the typed query helpers on [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Path(#[from] NavigateError),

    #[error("yaml path '{path}' didn't return a valid string: found {found}")]
    NotAString { path: String, found: &'static str },
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: YamlValue,
    /// The text the tree was parsed from, when there was one
    source: Option<String>,
}

impl Document {
    /// Wraps an already built tree. There is no source text, so
    /// [`Document::deserialize`] works from the tree itself.
    pub fn new(root: YamlValue) -> Self {
        Self { root, source: None }
    }

    /// Wraps a tree together with the text it was parsed from.
    pub fn with_source(root: YamlValue, source: Option<String>) -> Self {
        Self { root, source }
    }

    pub fn root(&self) -> &YamlValue {
        &self.root
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn into_root(self) -> YamlValue {
        self.root
    }

    /// Walks pre-split path segments from the root.
    pub fn navigate<'p, S: AsRef<str>>(&self, path: &'p [S]) -> Navigation<'_, 'p, S> {
        navigate(&self.root, path)
    }

    /// Returns the value designated by a `/`-separated path such as
    /// `level1/level2/3/level4`.
    pub fn query(&self, path: &str) -> Result<&YamlValue, NavigateError> {
        debug!(path, "querying document");
        navigate(&self.root, &split_path(path)).into_result()
    }

    /// Returns the string designated by a `/`-separated path.
    ///
    /// Fails with [`QueryError::NotAString`] when the path resolves to
    /// anything other than a string scalar.
    pub fn get_str(&self, path: &str) -> Result<&str, QueryError> {
        let value = self.query(path)?;
        value.as_str().ok_or_else(|| QueryError::NotAString {
            path: path.to_string(),
            found: value.kind_name(),
        })
    }

    /// Renders the value designated by `keys` as document text.
    ///
    /// See [`render_scalar`] for the output format and the meaning of
    /// `include_container`.
    pub fn get_string<S: AsRef<str>>(
        &self,
        include_container: bool,
        keys: &[S],
    ) -> Result<String, RenderError> {
        render_scalar(&self.root, keys, include_container)
    }

    /// Deserializes the whole document into `T`.
    ///
    /// The original text is used when available, so anchors and tags are
    /// resolved by the YAML deserializer exactly as written.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        match &self.source {
            Some(source) => serde_yaml::from_str(source),
            None => serde_yaml::from_value(self.root.to_serde_value()),
        }
    }
}

impl FromStr for Document {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let root = parse_yaml(s)?;
        Ok(Self::with_source(root, Some(s.to_string())))
    }
}

/// Splits a `/`-separated path into segments.
///
/// The empty string is the empty path. Otherwise every `/` separates two
/// literal segments, so `a//b` contains an empty key and a leading `/`
/// starts with one.
///
/// # Example
///
/// ```
/// use yamlutils::document::tree::split_path;
///
/// assert!(split_path("").is_empty());
/// assert_eq!(split_path("a/0/b"), vec!["a", "0", "b"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}
