//! Error types and utilities for hplot

use thiserror::Error;

/// Result type alias for hplot operations
pub type Result<T> = std::result::Result<T, HPlotError>;

/// Boxed cause carried by the variants that have a source
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for hplot operations
#[derive(Error, Debug)]
pub enum HPlotError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed point input
    #[error("Parse error on line {line}: {message}")]
    Parse {
        message: String,
        line: usize,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Figure drawing errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Viewer window errors
    #[error("Display error: {message}")]
    Display { message: String },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl HPlotError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Malformed input on the given 1-based line
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
            line,
            source: None,
        }
    }

    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display {
            message: msg.into(),
        }
    }

    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Attach `cause` as the error source
    ///
    /// `Io`, `Serialization`, `Display` and `Validation` carry no source slot
    /// and are returned unchanged.
    pub fn caused_by(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        match &mut self {
            Self::Config { source, .. }
            | Self::Parse { source, .. }
            | Self::Graph { source, .. } => {
                let boxed: BoxedSource = Box::new(cause);
                *source = Some(boxed);
            }
            Self::Io(_) | Self::Serialization(_) | Self::Display { .. } | Self::Validation { .. } => {}
        }
        self
    }

    /// Input line number for parse errors
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// Error conversion implementations for external types

/// Convert from serde_yaml::Error to HPlotError
impl From<serde_yaml::Error> for HPlotError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config("YAML parsing error").caused_by(err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to HPlotError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for HPlotError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph("Graph rendering failed").caused_by(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = HPlotError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let parse_error = HPlotError::parse(3, "expected 2 tokens, found 3");
        assert_eq!(
            parse_error.to_string(),
            "Parse error on line 3: expected 2 tokens, found 3"
        );
        assert_eq!(parse_error.line(), Some(3));

        let validation_error = HPlotError::validation_field("Invalid order", "order");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid order"));
        assert_eq!(validation_error.line(), None);
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = HPlotError::config("Failed to read file").caused_by(io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());

        let int_error = "a".parse::<i64>().unwrap_err();
        let parse_error = HPlotError::parse(1, "invalid integer token 'a'").caused_by(int_error);
        assert!(parse_error.source().is_some());

        let display_error = HPlotError::display("no window").caused_by(io::Error::other("x"));
        assert!(display_error.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed");
        let error: HPlotError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err();
        let error: HPlotError = json_error.into();

        assert!(matches!(error, HPlotError::Serialization(_)));
        assert!(error.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<Vec<u32>>("[1, two").unwrap_err();
        let error: HPlotError = yaml_error.into();

        assert!(error.to_string().starts_with("Configuration error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_display_formatting() {
        let config_error = HPlotError::config("missing field");
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: missing field"
        );

        let display_error = HPlotError::display("no display server");
        assert_eq!(format!("{}", display_error), "Display error: no display server");
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = HPlotError::config("Middle layer").caused_by(root_error);
        let top_error = HPlotError::graph("Top layer").caused_by(middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert_eq!(error_count, 2);
    }
}
