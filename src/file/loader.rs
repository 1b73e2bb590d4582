//! Document loading functionality.
//!
//! This module reads documents from files, readers, stdin or strings and
//! parses them into [`Document`]s ready to be queried.

use super::error::LoadError;
use crate::document::parser::{parse_json, parse_yaml};
use crate::document::tree::Document;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a document from the filesystem.
///
/// Files ending in `.gz` are decompressed first. The format is JSON when
/// the remaining name ends in `.json` and YAML otherwise.
///
/// # Examples
///
/// ```no_run
/// use yamlutils::file::loader::load_file;
///
/// let doc = load_file("config.yml").unwrap();
/// println!("{}", doc.get_string(false, &["server", "host"]).unwrap());
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails to decompress, is not
/// UTF-8, or does not parse.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading document");

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = if is_gzipped(path) {
        decompress_gzip_bytes(&bytes)?
    } else {
        String::from_utf8(bytes)?
    };

    let root = if is_json(path) {
        parse_json(&content)?
    } else {
        parse_yaml(&content)?
    };
    Ok(Document::with_source(root, Some(content)))
}

/// Loads and parses a document from any reader.
///
/// The whole input is read before parsing. Gzip input is recognised by its
/// magic bytes. JSON input is accepted since it parses as YAML.
pub fn load_reader<R: Read>(mut reader: R) -> Result<Document, LoadError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(LoadError::Read)?;
    debug!(bytes = buffer.len(), "loading document from reader");

    let content = if buffer.starts_with(&GZIP_MAGIC) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer)?
    };

    load_str(&content)
}

/// Loads and parses a document from standard input.
pub fn load_stdin() -> Result<Document, LoadError> {
    load_reader(io::stdin().lock())
}

/// Parses a YAML string into a document.
pub fn load_str(content: &str) -> Result<Document, LoadError> {
    content.parse()
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Determines if a file holds JSON based on its name.
///
/// - `data.json` → true
/// - `data.json.gz` → true
/// - `data.yml.gz` → false
fn is_json(path: &Path) -> bool {
    let name = path.to_string_lossy().to_ascii_lowercase();
    let base = name.strip_suffix(".gz").unwrap_or(&name);
    base.ends_with(".json")
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String, LoadError> {
    let mut decoder = GzDecoder::new(bytes);
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .map_err(LoadError::Decompress)?;
    Ok(String::from_utf8(content)?)
}
