//! Conversion of parsed YAML and JSON into [`YamlValue`] trees.
//!
//! Parsing itself is done by `serde_yaml` and `serde_json`; this module maps
//! their generic values onto the three-variant document model.
//!
//! # Example
//!
//! ```
//! use yamlutils::document::parser::parse_yaml;
//!
//! let root = parse_yaml("name: Alice\nage: 30").unwrap();
//! assert!(root.is_mapping());
//! ```

use super::node::{Scalar, YamlNumber, YamlValue};
use crate::file::LoadError;
use indexmap::IndexMap;
use serde::Deserialize;

/// Parses a YAML string into a document tree.
///
/// An empty document parses to a null scalar. Tags are dropped and the
/// tagged value is kept. Merge keys (`<<: *anchor`) are applied. Only the
/// first document of a multi-document stream is read.
///
/// # Errors
///
/// Returns [`LoadError::Yaml`] for syntax errors and
/// [`LoadError::UnsupportedKey`] when a mapping key is a mapping or a
/// sequence.
///
/// # Example
///
/// ```
/// use yamlutils::document::parser::parse_yaml;
///
/// assert!(parse_yaml("a: [1, 2").is_err());
/// ```
pub fn parse_yaml(yaml_str: &str) -> Result<YamlValue, LoadError> {
    if yaml_str.trim().is_empty() {
        return Ok(YamlValue::Scalar(Scalar::Null));
    }
    let mut value = match serde_yaml::Deserializer::from_str(yaml_str).next() {
        Some(document) => serde_yaml::Value::deserialize(document)?,
        None => return Ok(YamlValue::Scalar(Scalar::Null)),
    };
    value.apply_merge()?;
    from_serde_yaml(&value)
}

/// Parses a JSON string into a document tree.
pub fn parse_json(json_str: &str) -> Result<YamlValue, LoadError> {
    let value: serde_json::Value = serde_json::from_str(json_str)?;
    Ok(from_serde_json(&value))
}

/// Converts a `serde_yaml::Value` into a document tree.
///
/// Scalar keys are turned into their literal text (`1`, `true`, `null`), so
/// every key can be addressed by a path segment. If two keys end up with
/// the same text the later entry wins.
pub fn from_serde_yaml(value: &serde_yaml::Value) -> Result<YamlValue, LoadError> {
    use serde_yaml::Value;

    let converted = match value {
        Value::Null => YamlValue::Scalar(Scalar::Null),
        Value::Bool(b) => YamlValue::Scalar(Scalar::Boolean(*b)),
        Value::Number(n) => YamlValue::Scalar(Scalar::Number(yaml_number(n))),
        Value::String(s) => YamlValue::Scalar(Scalar::String(s.clone())),
        Value::Sequence(items) => YamlValue::Sequence(
            items
                .iter()
                .map(from_serde_yaml)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Mapping(map) => {
            let mut entries = IndexMap::with_capacity(map.len());
            for (k, v) in map {
                entries.insert(key_text(k)?, from_serde_yaml(v)?);
            }
            YamlValue::Mapping(entries)
        }
        Value::Tagged(tagged) => from_serde_yaml(&tagged.value)?,
    };
    Ok(converted)
}

/// Converts a `serde_json::Value` into a document tree.
pub fn from_serde_json(value: &serde_json::Value) -> YamlValue {
    use serde_json::Value;

    match value {
        Value::Null => YamlValue::Scalar(Scalar::Null),
        Value::Bool(b) => YamlValue::Scalar(Scalar::Boolean(*b)),
        Value::Number(n) => {
            let number = if let Some(i) = n.as_i64() {
                YamlNumber::Integer(i)
            } else if let Some(u) = n.as_u64() {
                YamlNumber::Unsigned(u)
            } else {
                YamlNumber::Float(n.as_f64().unwrap_or(f64::NAN))
            };
            YamlValue::Scalar(Scalar::Number(number))
        }
        Value::String(s) => YamlValue::Scalar(Scalar::String(s.clone())),
        Value::Array(items) => YamlValue::Sequence(items.iter().map(from_serde_json).collect()),
        Value::Object(map) => YamlValue::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), from_serde_json(v)))
                .collect(),
        ),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> YamlNumber {
    if let Some(i) = n.as_i64() {
        YamlNumber::Integer(i)
    } else if let Some(u) = n.as_u64() {
        YamlNumber::Unsigned(u)
    } else {
        YamlNumber::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn key_text(key: &serde_yaml::Value) -> Result<String, LoadError> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(yaml_number(n).to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_text(&tagged.value),
        Value::Sequence(_) => Err(LoadError::UnsupportedKey("sequence")),
        Value::Mapping(_) => Err(LoadError::UnsupportedKey("mapping")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_yaml("hello").unwrap(), YamlValue::from("hello"));
        assert_eq!(parse_yaml("42").unwrap(), YamlValue::from(42i64));
        assert_eq!(parse_yaml("4.5").unwrap(), YamlValue::from(4.5));
        assert_eq!(parse_yaml("true").unwrap(), YamlValue::from(true));
        assert_eq!(parse_yaml("~").unwrap(), YamlValue::Scalar(Scalar::Null));
    }

    #[test]
    fn test_parse_empty_document_is_null() {
        assert_eq!(parse_yaml("").unwrap(), YamlValue::Scalar(Scalar::Null));
    }

    #[test]
    fn test_parse_large_unsigned() {
        let root = parse_yaml("18446744073709551615").unwrap();
        assert_eq!(
            root,
            YamlValue::Scalar(Scalar::Number(YamlNumber::Unsigned(u64::MAX)))
        );
    }

    #[test]
    fn test_parse_nested_structure() {
        let root = parse_yaml("hello:\n  - one\n  - world: hola\n").unwrap();
        match root {
            YamlValue::Mapping(entries) => match &entries["hello"] {
                YamlValue::Sequence(items) => {
                    assert_eq!(items.len(), 2);
                    assert!(items[1].is_mapping());
                }
                other => panic!("Expected sequence, got {:?}", other),
            },
            other => panic!("Expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_keys_become_text() {
        let root = parse_yaml("1: one\ntrue: yes\n~: nothing\n").unwrap();
        match root {
            YamlValue::Mapping(entries) => {
                assert_eq!(entries["1"], YamlValue::from("one"));
                assert!(entries.contains_key("true"));
                assert!(entries.contains_key("null"));
            }
            other => panic!("Expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_complex_key_rejected() {
        let result = parse_yaml("? [a, b]\n: value\n");
        assert!(matches!(result, Err(LoadError::UnsupportedKey("sequence"))));
    }

    #[test]
    fn test_tags_are_dropped() {
        let root = parse_yaml("value: !custom\n  inner: 12\n").unwrap();
        match root {
            YamlValue::Mapping(entries) => assert!(entries["value"].is_mapping()),
            other => panic!("Expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_keys_are_applied() {
        let root = parse_yaml("base: &b\n  host: db\nprod:\n  <<: *b\n  port: 5432\n").unwrap();
        match root {
            YamlValue::Mapping(entries) => match &entries["prod"] {
                YamlValue::Mapping(prod) => {
                    assert_eq!(prod["host"], YamlValue::from("db"));
                    assert_eq!(prod["port"], YamlValue::from(5432i64));
                    assert!(!prod.contains_key("<<"));
                }
                other => panic!("Expected mapping, got {:?}", other),
            },
            other => panic!("Expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_first_document_of_stream() {
        let root = parse_yaml("a: 1\n---\nb: 2\n").unwrap();
        match root {
            YamlValue::Mapping(entries) => {
                assert_eq!(entries["a"], YamlValue::from(1i64));
                assert!(!entries.contains_key("b"));
            }
            other => panic!("Expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(parse_yaml("a: [1, 2"), Err(LoadError::Yaml(_))));
    }

    #[test]
    fn test_parse_json() {
        let root = parse_json(r#"{"items": [1, 2.5, "three", null, false]}"#).unwrap();
        match root {
            YamlValue::Mapping(entries) => match &entries["items"] {
                YamlValue::Sequence(items) => {
                    assert_eq!(items[0], YamlValue::from(1i64));
                    assert_eq!(items[1], YamlValue::from(2.5));
                    assert_eq!(items[2], YamlValue::from("three"));
                    assert_eq!(items[3], YamlValue::Scalar(Scalar::Null));
                    assert_eq!(items[4], YamlValue::from(false));
                }
                other => panic!("Expected sequence, got {:?}", other),
            },
            other => panic!("Expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_json(r#"{"unclosed": "#), Err(LoadError::Json(_))));
    }
}
