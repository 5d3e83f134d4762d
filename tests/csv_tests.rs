//! Integration tests for naive CSV reading.

use std::path::{Path, PathBuf};

use mailbits::csv::{parse_columns, parse_rows};
use mailbits::MailbitsError;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_rows_with_custom_separator() {
    let parsed = parse_rows(&fixture("semicolon.csv"), ";").unwrap();
    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(
        parsed.rows,
        vec![
            vec!["r0c0", "r0c1", "r0c2"],
            vec!["r1c0", "r1c1", "r1c2"],
        ]
    );
    assert_eq!(parsed.get(1, "col0"), Some("r1c0"));
}

#[test]
fn test_outer_quotes_and_crlf_are_stripped() {
    let parsed = parse_rows(&fixture("quoted.csv"), ",").unwrap();
    assert_eq!(parsed.headers["col0"], 0);
    assert_eq!(parsed.get(1, "col2"), Some("r1c2"));
}

#[test]
fn test_columns_keep_header_order() {
    let parsed = parse_columns(&fixture("semicolon.csv"), ";").unwrap();
    assert_eq!(parsed.headers, vec!["col0", "col1", "col2"]);
    assert_eq!(parsed.column("col1").unwrap(), ["r0c1", "r1c1"]);
    assert!(parsed.column("col9").is_none());
}

#[test]
fn test_header_only_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("header.csv");
    std::fs::write(&path, "a,b\n").unwrap();

    let rows = parse_rows(&path, ",").unwrap();
    assert!(rows.rows.is_empty());
    let columns = parse_columns(&path, ",").unwrap();
    assert_eq!(columns.column("b").unwrap().len(), 0);
}

#[test]
fn test_missing_file_is_reported_with_path() {
    let err = parse_columns(&fixture("does-not-exist.csv"), ",").unwrap_err();
    match err {
        MailbitsError::FileNotFound(path) => assert!(path.ends_with("does-not-exist.csv")),
        other => panic!("unexpected error: {other}"),
    }
}
