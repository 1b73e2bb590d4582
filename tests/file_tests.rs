//! Integration tests for document loading.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use yamlutils::document::tree::Document;
use yamlutils::file::{load_file, load_reader, load_str, LoadError};
use yamlutils::navigate::ErrorKind;

#[test]
fn test_load_yaml_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "server:\n  host: localhost\n  ports: [80, 443]\n").unwrap();

    let doc = load_file(temp_file.path()).unwrap();
    assert_eq!(doc.get_str("server/host"), Ok("localhost"));
    assert_eq!(doc.get_string(false, &["server", "ports", "0"]).unwrap(), "80");
    assert!(doc.source().unwrap().contains("localhost"));
}

#[test]
fn test_load_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let json = serde_json::json!({
        "users": [{"name": "Alice", "active": true}, {"name": "Bob", "active": false}]
    });
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

    let doc = load_file(&path).unwrap();
    assert_eq!(doc.get_str("users/1/name"), Ok("Bob"));
    assert_eq!(doc.get_string(false, &["users", "0", "active"]).unwrap(), "true");
}

#[test]
fn test_load_gzipped_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.yml.gz");
    let file = fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(b"hello:\n  - one\n  - two\n").unwrap();
    encoder.finish().unwrap();

    let doc = load_file(&path).unwrap();
    assert_eq!(doc.get_string(false, &["hello", "1"]).unwrap(), "two");
}

#[test]
fn test_load_gzipped_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json.gz");
    let file = fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(br#"{"count": 3}"#).unwrap();
    encoder.finish().unwrap();

    let doc = load_file(&path).unwrap();
    assert_eq!(doc.get_string(false, &["count"]).unwrap(), "3");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_file(dir.path().join("missing.yml"));
    match result {
        Err(LoadError::Io { path, .. }) => assert!(path.ends_with("missing.yml")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_malformed_yaml_is_a_load_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "key: [unclosed").unwrap();
    assert!(matches!(load_file(temp_file.path()), Err(LoadError::Yaml(_))));
}

#[test]
fn test_load_malformed_json_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"a\": ").unwrap();
    assert!(matches!(load_file(&path), Err(LoadError::Json(_))));
}

#[test]
fn test_load_reader_accepts_json() {
    let doc = load_reader(r#"{"hello": ["one", "two"]}"#.as_bytes()).unwrap();
    assert_eq!(doc.get_string(false, &["hello", "0"]).unwrap(), "one");
}

#[test]
fn test_load_str_and_query_errors() {
    let doc = load_str("hello: world").unwrap();
    assert_eq!(
        doc.query("x").unwrap_err().kind(),
        ErrorKind::MapKeyNotFound
    );
    assert_eq!(
        doc.query("hello/deeper").unwrap_err().kind(),
        ErrorKind::ExtraElementsInPath
    );
    assert!(doc.query("").unwrap().is_mapping());
}

#[test]
fn test_document_from_str_matches_load_str() {
    let parsed: Document = "a: 1".parse().unwrap();
    assert_eq!(parsed, load_str("a: 1").unwrap());
}

#[test]
fn test_load_str_resolves_merge_keys() {
    let doc = load_str("base: &b\n  host: db\nprod:\n  <<: *b\n  port: 5432\n").unwrap();
    assert_eq!(doc.get_string(false, &["prod", "host"]).unwrap(), "db");
}

#[test]
fn test_load_str_reads_first_document() {
    let doc = load_str("a: 1\n---\nb: 2\n").unwrap();
    assert_eq!(doc.get_string(false, &["a"]).unwrap(), "1");
    assert_eq!(
        doc.query("b").unwrap_err().kind(),
        ErrorKind::MapKeyNotFound
    );
}
