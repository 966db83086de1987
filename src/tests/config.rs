use super::Config;
use crate::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_when_file_missing() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::load_from(&dir.path().join("tocsmith.toml")).unwrap();
    assert_eq!(cfg.file_extensions, ["md"]);
    assert_eq!(cfg.marker, "#");
    assert_eq!(cfg.indent_width, 2);
}

#[test]
fn test_values_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tocsmith.toml");
    fs::write(&path, "file_extensions = [\"md\", \"txt\"]\nindent_width = 4\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.file_extensions, ["md", "txt"]);
    assert_eq!(cfg.indent_width, 4);
    assert_eq!(cfg.marker, "#");
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(matches!(
        Config::parse("indent_width = \"wide\""),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_heading_pattern_from_marker() {
    let mut cfg = Config::parse("marker = \"=\"").unwrap();
    assert_eq!(cfg.heading_pattern().unwrap().marker(), '=');

    cfg.marker = "==".to_string();
    assert!(matches!(cfg.heading_pattern(), Err(Error::InvalidMarker(_))));

    cfg.marker = String::new();
    assert!(matches!(cfg.heading_pattern(), Err(Error::InvalidMarker(_))));
}
