//! Tests for loading configuration files.

use std::io::Write;
use tictactoe::config::DEFAULT_CONFIG_PATH;
use tictactoe::{Config, MarkColor};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_filter = "debug"
show_cell_numbers = false

[theme]
x_color = "cyan"
highlight_color = "magenta"
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).expect("Valid config");
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.show_cell_numbers());
    assert_eq!(*config.theme().x_color(), MarkColor::Cyan);
    assert_eq!(*config.theme().o_color(), MarkColor::Red);
    assert_eq!(*config.theme().highlight_color(), MarkColor::Magenta);
    assert_eq!(config.log_file(), &std::path::PathBuf::from("tictactoe.log"));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_cell_numbers = \"sometimes\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}

/// Both working-directory cases live in one test: the cwd is process-wide.
#[test]
fn test_default_path_in_working_directory() {
    let previous_dir = std::env::current_dir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    // No ./tictactoe.toml: defaults, and nothing located.
    let missing = Config::load(None);
    let located_missing = Config::locate(None);

    // ./tictactoe.toml present: its contents are used.
    std::fs::write(DEFAULT_CONFIG_PATH, "log_filter = \"trace\"\n").unwrap();
    let present = Config::load(None);
    let located_present = Config::locate(None);

    std::env::set_current_dir(previous_dir).unwrap();

    assert_eq!(missing.expect("Defaults without a file"), Config::default());
    assert_eq!(located_missing, None);

    let present = present.expect("Valid default-path config");
    assert_eq!(present.log_filter(), "trace");
    assert_eq!(*present.theme().x_color(), MarkColor::Blue);
    assert_eq!(located_present, Some(DEFAULT_CONFIG_PATH.into()));
}
