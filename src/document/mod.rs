//! Document model: the value tree, parsers that build it, and the
//! [`tree::Document`] handle used to query it.

pub mod node;
pub mod parser;
pub mod tree;

pub use node::{Scalar, YamlNumber, YamlValue};
pub use tree::{split_path, Document, QueryError};
