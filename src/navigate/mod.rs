//! Path navigation over parsed document trees.
//!
//! A path is a list of literal segments. Each segment is looked up as a key
//! when the current node is a mapping, or parsed as a base-10 index when it
//! is a sequence. There are no wildcards, slices or filters.
//!
//! # Errors
//!
//! A walk that cannot consume a segment stops and reports one of four
//! [`ErrorKind`]s, together with the last node reached and the rest of
//! the path:
//!
//! - `ExtraElementsInPath` - the path continues past a scalar
//! - `MapKeyNotFound` - a key is missing from a mapping
//! - `NotAnIndex` - a sequence segment is not an integer
//! - `InvalidIndex` - a sequence index is negative or past the end

pub mod error;
pub mod navigator;
pub mod render;

pub use error::{ErrorKind, NavigateError};
pub use navigator::{navigate, Navigation};
pub use render::{render_scalar, render_value, RenderError};
