//! Integration tests for hplot-common crate.

use hplot_common::{ensure_field, init_logging, HPlotError, LogFormat, LoggingConfig, Result};
use std::error::Error;

fn checked_stride(stride: usize) -> Result<usize> {
    ensure_field!(stride > 0, "stride", "stride must be positive, got {}", stride);
    Ok(stride)
}

#[test]
fn test_ensure_field_macro_from_outside_the_crate() {
    assert_eq!(checked_stride(3).unwrap(), 3);
    let err = checked_stride(0).unwrap_err();
    assert_eq!(err.to_string(), "Validation error: stride must be positive, got 0");
}

#[test]
fn test_parse_error_keeps_line_and_source() {
    let source = "x".parse::<i64>().unwrap_err();
    let err = HPlotError::parse(7, "invalid token 'x'").caused_by(source);

    assert_eq!(err.line(), Some(7));
    assert!(err.to_string().contains("line 7"));
    assert!(err.source().is_some());
}

#[test]
fn test_yaml_error_becomes_config_error() {
    let yaml_err = serde_yaml::from_str::<Vec<u32>>("{not: [a list").unwrap_err();
    let err: HPlotError = yaml_err.into();
    assert!(matches!(err, HPlotError::Config { .. }));
}

#[test]
fn test_logging_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hplot.log");

    let config = LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Full,
        file_path: Some(path.to_string_lossy().into_owned()),
        ..LoggingConfig::default()
    };
    assert!(init_logging(config).is_ok());
    assert!(path.exists());
}
