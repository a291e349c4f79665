//! Configuration loading utilities

use crate::{Config, MalformedPolicy, SegmentColoring};
use hplot_common::Result as HPlotResult;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "HPLOT_CONFIG_PATH";

/// File names probed in the working directory when no path is given
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["hplot.yaml", "hplot.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for hplot_common::HPlotError {
    fn from(err: ConfigError) -> Self {
        hplot_common::HPlotError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        Self::finish(config)
    }

    /// Parse YAML text without applying overrides or validation
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from the environment-named file, a file in the
    /// working directory, or built-in defaults
    pub fn load() -> HPlotResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Ok(Self::load_config(&config_path)?);
        }

        for candidate in DEFAULT_CONFIG_FILES {
            if Path::new(candidate).exists() {
                return Ok(Self::load_config(candidate)?);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::finish(Config::default())?)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HPlotResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Load from `path` when given, otherwise fall back to [`ConfigLoader::load`]
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> HPlotResult<Config> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    fn finish(mut config: Config) -> Result<Config, ConfigError> {
        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Some(width) = parse_env("HPLOT_WIDTH")? {
            config.render.width = width;
        }

        if let Some(height) = parse_env("HPLOT_HEIGHT")? {
            config.render.height = height;
        }

        if let Ok(bg_color) = env::var("HPLOT_BACKGROUND_COLOR") {
            config.render.background_color = bg_color;
        }

        if let Some(marker_size) = parse_env("HPLOT_MARKER_SIZE")? {
            config.render.marker_size = marker_size;
        }

        if let Some(coloring) = parse_env::<SegmentColoring>("HPLOT_SEGMENT_COLORING")? {
            config.render.segment_coloring = coloring;
        }

        if let Some(policy) = parse_env::<MalformedPolicy>("HPLOT_MALFORMED_POLICY")? {
            config.input.malformed_policy = policy;
        }

        if let Ok(level) = env::var("HPLOT_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn parse_env<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::EnvParseError {
                var: var.to_string(),
                source: e.to_string().into(),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_content() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, Config::default());

        let config = ConfigLoader::parse("   \n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = ConfigLoader::parse("render: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_error_conversion() {
        let err = ConfigLoader::parse("render: [unclosed").unwrap_err();
        let converted: hplot_common::HPlotError = err.into();
        assert!(converted.to_string().starts_with("Configuration error"));
    }
}
