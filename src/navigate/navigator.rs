//! Segment-by-segment descent through a document tree.

use super::error::NavigateError;
use crate::document::node::YamlValue;

/// Outcome of walking a path against a tree.
///
/// On success `remaining` is empty and `error` is `None`. On failure
/// `located` is the last node reached, `remaining` is the suffix of the
/// path starting at the segment that could not be consumed, and `error`
/// says why.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<'v, 'p, S> {
    pub located: &'v YamlValue,
    pub remaining: &'p [S],
    pub error: Option<NavigateError>,
}

impl<'v, 'p, S> Navigation<'v, 'p, S> {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Drops the partial-result context and keeps only the outcome.
    pub fn into_result(self) -> Result<&'v YamlValue, NavigateError> {
        match self.error {
            None => Ok(self.located),
            Some(err) => Err(err),
        }
    }
}

/// Walks `path` down from `root`, one segment per step.
///
/// Mapping nodes consume a segment as a key, sequence nodes as a base-10
/// index (`str::parse::<i64>`, so `"01"` and `"+1"` both mean 1), and a
/// scalar cannot consume anything. The first segment that cannot be
/// consumed ends the walk; nothing is retried.
///
/// # Example
///
/// ```
/// use yamlutils::document::parser::parse_yaml;
/// use yamlutils::navigate::{navigate, ErrorKind};
///
/// let root = parse_yaml("hello: [one, two, three]").unwrap();
///
/// let found = navigate(&root, &["hello", "1"]);
/// assert_eq!(found.located.as_str(), Some("two"));
/// assert!(found.remaining.is_empty());
///
/// let missed = navigate(&root, &["hello", "7"]);
/// assert_eq!(missed.error.unwrap().kind(), ErrorKind::InvalidIndex);
/// assert_eq!(missed.remaining, &["7"]);
/// ```
pub fn navigate<'v, 'p, S: AsRef<str>>(
    root: &'v YamlValue,
    path: &'p [S],
) -> Navigation<'v, 'p, S> {
    let mut current = root;
    let mut remaining = path;

    while let Some((segment, rest)) = remaining.split_first() {
        let position = path.len() - remaining.len();
        match step(current, segment.as_ref(), remaining, position, path) {
            Ok(child) => {
                current = child;
                remaining = rest;
            }
            Err(error) => {
                return Navigation {
                    located: current,
                    remaining,
                    error: Some(error),
                }
            }
        }
    }

    Navigation {
        located: current,
        remaining,
        error: None,
    }
}

fn step<'v, S: AsRef<str>>(
    node: &'v YamlValue,
    segment: &str,
    remaining: &[S],
    position: usize,
    path: &[S],
) -> Result<&'v YamlValue, NavigateError> {
    match node {
        YamlValue::Mapping(entries) => {
            entries
                .get(segment)
                .ok_or_else(|| NavigateError::MapKeyNotFound {
                    key: segment.to_string(),
                    position,
                    path: join(path),
                })
        }
        YamlValue::Sequence(items) => {
            let index = segment
                .parse::<i64>()
                .map_err(|_| NavigateError::NotAnIndex {
                    segment: segment.to_string(),
                    position,
                    path: join(path),
                })?;
            usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .ok_or_else(|| NavigateError::InvalidIndex {
                    index,
                    len: items.len(),
                    position,
                    path: join(path),
                })
        }
        YamlValue::Scalar(_) => Err(NavigateError::ExtraElementsInPath {
            remaining: join(remaining),
            position,
            path: join(path),
        }),
    }
}

fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::Scalar;
    use crate::navigate::ErrorKind;
    use indexmap::IndexMap;

    fn strings(items: &[&str]) -> YamlValue {
        YamlValue::Sequence(items.iter().map(|s| YamlValue::from(*s)).collect())
    }

    fn mapping(entries: Vec<(&str, YamlValue)>) -> YamlValue {
        YamlValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<IndexMap<_, _>>(),
        )
    }

    #[test]
    fn test_empty_path_returns_root() {
        let root = YamlValue::from("hola");
        let nav = navigate::<&str>(&root, &[]);
        assert!(nav.is_success());
        assert!(std::ptr::eq(nav.located, &root));
        assert!(nav.remaining.is_empty());
    }

    #[test]
    fn test_scalar_with_path_is_extra_elements() {
        let root = YamlValue::from("hola");
        let path = ["extra", "elements"];
        let nav = navigate(&root, &path);
        assert_eq!(nav.located, &root);
        assert_eq!(nav.remaining, &["extra", "elements"]);
        let err = nav.error.unwrap();
        assert_eq!(err.kind(), ErrorKind::ExtraElementsInPath);
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_sequence_index() {
        let root = strings(&["one", "two", "three"]);
        let nav = navigate(&root, &["1"]);
        assert!(nav.is_success());
        assert_eq!(nav.located.as_str(), Some("two"));
    }

    #[test]
    fn test_bracketed_index_is_not_an_index() {
        let root = strings(&["one", "two", "three"]);
        let nav = navigate(&root, &["[1]"]);
        assert_eq!(nav.located, &root);
        assert_eq!(nav.remaining, &["[1]"]);
        assert_eq!(nav.error.unwrap().kind(), ErrorKind::NotAnIndex);
    }

    #[test]
    fn test_index_parsing_policy() {
        let root = strings(&["one", "two", "three"]);
        assert_eq!(navigate(&root, &["01"]).located.as_str(), Some("two"));
        assert_eq!(navigate(&root, &["+1"]).located.as_str(), Some("two"));

        for bad in ["", " 1", "1.0", "one", "99999999999999999999"] {
            let path = [bad];
            let nav = navigate(&root, &path);
            assert_eq!(nav.error.unwrap().kind(), ErrorKind::NotAnIndex, "{:?}", bad);
        }
        for out_of_range in ["-1", "3", "100"] {
            let path = [out_of_range];
            let nav = navigate(&root, &path);
            assert_eq!(nav.error.unwrap().kind(), ErrorKind::InvalidIndex);
        }
    }

    #[test]
    fn test_negative_index_never_counts_from_end() {
        let root = strings(&["one", "two", "three"]);
        let nav = navigate(&root, &["-1"]);
        assert_eq!(nav.located, &root);
        match nav.error.unwrap() {
            NavigateError::InvalidIndex { index, len, .. } => {
                assert_eq!(index, -1);
                assert_eq!(len, 3);
            }
            other => panic!("Expected InvalidIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_key_reports_mapping_and_suffix() {
        let root = mapping(vec![(
            "a",
            mapping(vec![("b", YamlValue::from(1i64))]),
        )]);
        let path = vec!["a".to_string(), "x".to_string(), "y".to_string()];
        let nav = navigate(&root, &path);

        assert!(nav.located.is_mapping());
        assert_eq!(nav.remaining, &path[1..]);
        let err = nav.error.unwrap();
        assert_eq!(err.kind(), ErrorKind::MapKeyNotFound);
        assert_eq!(
            err.to_string(),
            "map key not found: key 'x' not found at segment 1 of path a/x/y"
        );
    }

    #[test]
    fn test_null_value_is_found() {
        let root = mapping(vec![("nothing", YamlValue::Scalar(Scalar::Null))]);
        let nav = navigate(&root, &["nothing"]);
        assert!(nav.is_success());
        assert_eq!(nav.located, &YamlValue::Scalar(Scalar::Null));
    }

    #[test]
    fn test_no_backtracking_into_elements() {
        let root = mapping(vec![(
            "list",
            YamlValue::Sequence(vec![mapping(vec![("name", YamlValue::from("x"))])]),
        )]);
        let nav = navigate(&root, &["list", "name"]);
        assert_eq!(nav.error.unwrap().kind(), ErrorKind::NotAnIndex);
        assert!(nav.located.is_sequence());
    }

    #[test]
    fn test_into_result() {
        let root = mapping(vec![("k", YamlValue::from(true))]);
        assert_eq!(
            navigate(&root, &["k"]).into_result(),
            Ok(&YamlValue::from(true))
        );
        assert_eq!(
            navigate(&root, &["k", "deeper"])
                .into_result()
                .unwrap_err()
                .kind(),
            ErrorKind::ExtraElementsInPath
        );
    }
}
