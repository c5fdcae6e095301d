//! Tests for configuration loading.

use noughts::Config;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.display().x_glyph(), "X");
    assert_eq!(config.display().o_glyph(), "O");
    assert_eq!(config.animation().reveal(), Duration::from_millis(900));
    assert_eq!(config.logging().file(), &PathBuf::from("noughts.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[display]
o_glyph = "()"

[animation]
reveal_ms = 300
"#,
    );
    let config = Config::from_file(file.path()).expect("valid config");
    assert_eq!(config.display().x_glyph(), "X");
    assert_eq!(config.display().o_glyph(), "()");
    assert_eq!(config.animation().reveal(), Duration::from_millis(300));
    assert_eq!(*config.animation().frame_ms(), 50);
    assert_eq!(config.logging().filter(), "info");
}

#[test]
fn test_zero_frame_interval_is_clamped() {
    let file = write_config("[animation]\nframe_ms = 0\n");
    let config = Config::from_file(file.path()).expect("valid config");
    assert_eq!(config.animation().frame(), Duration::from_millis(1));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[display\nx_glyph = ");
    let err = Config::load_or_default(file.path()).expect_err("malformed config");
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_wrong_type_is_an_error() {
    let file = write_config("[animation]\nreveal_ms = \"slow\"\n");
    assert!(Config::from_file(file.path()).is_err());
}
