//! Generic document value representation.
//!
//! Every parsed document, whatever its source format, becomes a tree of
//! [`YamlValue`]s: mappings from string keys to values, sequences of values,
//! and scalar leaves. The tree is plain owned data, so a parsed document can
//! be shared between threads and queried concurrently.
//!
//! # Example
//!
//! ```
//! use yamlutils::document::node::{Scalar, YamlNumber, YamlValue};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), YamlValue::from("yamlutils"));
//! map.insert("version".to_string(), YamlValue::Scalar(Scalar::Number(YamlNumber::Integer(3))));
//! let doc = YamlValue::Mapping(map);
//!
//! assert!(doc.is_mapping());
//! assert_eq!(doc.kind_name(), "mapping");
//! ```

use indexmap::IndexMap;
use std::fmt;

/// Represents YAML numbers.
///
/// Unsigned values only appear when the source holds an integer above
/// `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YamlNumber {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl fmt::Display for YamlNumber {
    /// Formats the number the way a YAML emitter writes it: integers in
    /// decimal, floats always with a fractional part or exponent, and the
    /// special values as `.inf`, `-.inf` and `.nan`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Unsigned(u) => write!(f, "{}", u),
            YamlNumber::Float(fl) if fl.is_nan() => write!(f, ".nan"),
            YamlNumber::Float(fl) if fl.is_infinite() => {
                if fl.is_sign_positive() {
                    write!(f, ".inf")
                } else {
                    write!(f, "-.inf")
                }
            }
            YamlNumber::Float(fl) => {
                let text = fl.to_string();
                if text.contains(['.', 'e', 'E']) {
                    write!(f, "{}", text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
        }
    }
}

impl YamlNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            YamlNumber::Integer(i) => *i as f64,
            YamlNumber::Unsigned(u) => *u as f64,
            YamlNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, YamlNumber::Integer(_) | YamlNumber::Unsigned(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, YamlNumber::Float(_))
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(YamlNumber),
    Boolean(bool),
    Null,
}

impl fmt::Display for Scalar {
    /// Writes the literal text of the scalar. Strings are written verbatim,
    /// without quoting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// A node of a parsed document.
///
/// The three variants are the only shapes a document can take. Code that
/// walks a tree matches on them exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// Key/value pairs. Keys are unique; insertion order is kept but carries
    /// no meaning.
    Mapping(IndexMap<String, YamlValue>),
    /// Ordered elements, addressed from 0.
    Sequence(Vec<YamlValue>),
    /// A leaf.
    Scalar(Scalar),
}

impl YamlValue {
    /// Returns true if this value is a mapping.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlutils::document::node::YamlValue;
    /// use indexmap::IndexMap;
    ///
    /// assert!(YamlValue::Mapping(IndexMap::new()).is_mapping());
    /// assert!(!YamlValue::from(42i64).is_mapping());
    /// ```
    pub fn is_mapping(&self) -> bool {
        matches!(self, YamlValue::Mapping(_))
    }

    /// Returns true if this value is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, YamlValue::Sequence(_))
    }

    /// Returns true if this value is a leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, YamlValue::Scalar(_))
    }

    /// Returns the string content if this value is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            YamlValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Short human readable name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::Scalar(Scalar::String(_)) => "string",
            YamlValue::Scalar(Scalar::Number(_)) => "number",
            YamlValue::Scalar(Scalar::Boolean(_)) => "boolean",
            YamlValue::Scalar(Scalar::Null) => "null",
        }
    }

    /// Converts the tree into a `serde_yaml::Value` so it can be handed to
    /// the YAML emitter.
    pub fn to_serde_value(&self) -> serde_yaml::Value {
        match self {
            YamlValue::Mapping(entries) => {
                let map: serde_yaml::Mapping = entries
                    .iter()
                    .map(|(k, v)| (serde_yaml::Value::String(k.clone()), v.to_serde_value()))
                    .collect();
                serde_yaml::Value::Mapping(map)
            }
            YamlValue::Sequence(elements) => {
                serde_yaml::Value::Sequence(elements.iter().map(|v| v.to_serde_value()).collect())
            }
            YamlValue::Scalar(Scalar::String(s)) => serde_yaml::Value::String(s.clone()),
            YamlValue::Scalar(Scalar::Number(n)) => serde_yaml::Value::Number(match n {
                YamlNumber::Integer(i) => serde_yaml::Number::from(*i),
                YamlNumber::Unsigned(u) => serde_yaml::Number::from(*u),
                YamlNumber::Float(f) => serde_yaml::Number::from(*f),
            }),
            YamlValue::Scalar(Scalar::Boolean(b)) => serde_yaml::Value::Bool(*b),
            YamlValue::Scalar(Scalar::Null) => serde_yaml::Value::Null,
        }
    }
}

impl From<&str> for YamlValue {
    fn from(s: &str) -> Self {
        YamlValue::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for YamlValue {
    fn from(s: String) -> Self {
        YamlValue::Scalar(Scalar::String(s))
    }
}

impl From<bool> for YamlValue {
    fn from(b: bool) -> Self {
        YamlValue::Scalar(Scalar::Boolean(b))
    }
}

impl From<i64> for YamlValue {
    fn from(i: i64) -> Self {
        YamlValue::Scalar(Scalar::Number(YamlNumber::Integer(i)))
    }
}

impl From<f64> for YamlValue {
    fn from(f: f64) -> Self {
        YamlValue::Scalar(Scalar::Number(YamlNumber::Float(f)))
    }
}
