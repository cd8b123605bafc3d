//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_gridfocus_config.toml"));
    assert!(matches!(
        result,
        Err(gridfocus_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[settle]
initial_delay_ms = 25

[keybinds]
focus_bottom_right = "Cmd+4"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.settle.initial_delay_ms, 25);
    assert_eq!(config.keybinds.focus_bottom_right, "Cmd+4");
    // Defaults preserved
    assert_eq!(config.settle.timeout_ms, 300);
    assert_eq!(config.keybinds.focus_top_left, "Ctrl+Alt+1");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(gridfocus_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_still_returns_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[settle]\npoll_interval_ms = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.settle.poll_interval_ms, 0);
}

#[test]
fn create_default_config_writes_parseable_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.settle.poll_interval_ms, 10);
    assert_eq!(config.keybinds.focus_top_right, "Ctrl+Alt+3");
}

#[test]
fn default_config_path_ends_with_gridfocus() {
    let path = default_config_path().unwrap();
    assert!(path.ends_with("gridfocus/config.toml"));
}
