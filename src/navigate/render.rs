//! Rendering of navigation results back to document text.

use super::error::{ErrorKind, NavigateError};
use super::navigator::navigate;
use crate::document::node::YamlValue;
use thiserror::Error;

/// Errors returned by [`render_scalar`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// The path could not be fully consumed. `text` holds the rendering of
    /// the last node reached, for use as diagnostic context.
    #[error("yaml path didn't return a valid value: {source}")]
    Path {
        text: String,
        #[source]
        source: NavigateError,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

impl RenderError {
    /// The navigation error kind, if this is a path failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RenderError::Path { source, .. } => Some(source.kind()),
            RenderError::Serialize(_) => None,
        }
    }

    /// The partial rendering, if this is a path failure.
    pub fn text(&self) -> Option<&str> {
        match self {
            RenderError::Path { text, .. } => Some(text),
            RenderError::Serialize(_) => None,
        }
    }
}

/// Renders a value to its document text.
///
/// Scalars come out as their literal text with no trailing newline
/// (`hola`, `true`, `123.123`). Mappings and sequences are emitted as block
/// YAML by `serde_yaml`.
pub fn render_value(value: &YamlValue) -> Result<String, serde_yaml::Error> {
    match value {
        YamlValue::Scalar(scalar) => Ok(scalar.to_string()),
        YamlValue::Mapping(_) | YamlValue::Sequence(_) => {
            serde_yaml::to_string(&value.to_serde_value())
        }
    }
}

/// Navigates `path` from `root` and renders what it finds.
///
/// With `include_container` and a non-empty path, the located value is
/// rendered inside a one-entry mapping keyed by the last path segment, so
/// the output reads like the fragment of the document it came from. The
/// flag does nothing for an empty path.
///
/// On a navigation failure the last node reached is still rendered and
/// returned in [`RenderError::Path`], without container wrapping.
///
/// # Example
///
/// ```
/// use yamlutils::document::parser::parse_yaml;
/// use yamlutils::navigate::render_scalar;
///
/// let root = parse_yaml("hello:\n  - one\n  - world: hola\n").unwrap();
///
/// assert_eq!(render_scalar(&root, &["hello", "1", "world"], false).unwrap(), "hola");
/// assert_eq!(
///     render_scalar(&root, &["hello", "1", "world"], true).unwrap(),
///     "world: hola\n"
/// );
/// ```
pub fn render_scalar<S: AsRef<str>>(
    root: &YamlValue,
    path: &[S],
    include_container: bool,
) -> Result<String, RenderError> {
    let nav = navigate(root, path);

    if let Some(source) = nav.error {
        let text = render_value(nav.located)?;
        return Err(RenderError::Path { text, source });
    }

    match path.last() {
        Some(key) if include_container => {
            let mut container = serde_yaml::Mapping::new();
            container.insert(
                serde_yaml::Value::String(key.as_ref().to_string()),
                nav.located.to_serde_value(),
            );
            Ok(serde_yaml::to_string(&container)?)
        }
        _ => Ok(render_value(nav.located)?),
    }
}
