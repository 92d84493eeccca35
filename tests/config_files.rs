//! Tests for configuration file loading
//!
//! `Config::from_file` reads, parses, and validates in three phases; each
//! phase should surface its own error context.

use digital_twin::config::Config;
use digital_twin::error::AppError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("should create temp file");
    file.write_all(content.as_bytes())
        .expect("should write config");
    file
}

#[test]
fn loads_valid_config_file() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9090

[model]
base_url = "http://localhost:11434"
name = "llama3.2"
"#,
    );

    let config = Config::from_file(file.path()).expect("should load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.model.name(), "llama3.2");
}

#[test]
fn missing_file_reports_read_error_with_path() {
    let err = Config::from_file("/nonexistent/config.toml").unwrap_err();
    assert!(matches!(err, AppError::ConfigFileRead { .. }));
    assert!(err.to_string().contains("/nonexistent/config.toml"));
}

#[test]
fn invalid_toml_reports_parse_error() {
    let file = write_config("this is not toml [[[");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, AppError::ConfigParseFailed { .. }));
}

#[test]
fn missing_model_section_reports_parse_error() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9090
"#,
    );
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, AppError::ConfigParseFailed { .. }));
}

#[test]
fn invalid_values_report_validation_error_with_path() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9090

[model]
base_url = "ftp://localhost:11434"
name = "llama3.2"
"#,
    );
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("base_url"));
}
