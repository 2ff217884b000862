//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{FrameFindConfig, LogLevel};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_framefind_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, framefind_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[find]
keep_selection_on_stop = true

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.find.keep_selection_on_stop);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert!(config.shortcuts.suppress_while_focused);
    assert_eq!(config.host.queue_capacity, 64);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, framefind_common::ConfigError::ParseError(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[host]\nqueue_capacity = \"lots\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse TOML"));
}

#[test]
fn create_default_config_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.shortcuts.suppress_while_focused);
    assert_eq!(config.window.title, "framefind");
}

#[test]
fn template_is_all_defaults() {
    let parsed: FrameFindConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(parsed.host.queue_capacity, 64);
    assert!(!parsed.find.keep_selection_on_stop);
}

#[test]
fn default_config_path_ends_with_framefind() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("framefind/config.toml"));
    }
}
