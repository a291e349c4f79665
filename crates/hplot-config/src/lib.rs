//! Configuration management for hplot

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILES};
pub use settings::{
    Config, HilbertConfig, InputConfig, LoggingSettings, MalformedPolicy, RenderConfig,
    SegmentColoring,
};
