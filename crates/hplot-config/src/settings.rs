//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Figure rendering settings
    pub render: RenderConfig,

    /// Point input handling
    pub input: InputConfig,

    /// Hilbert point generator settings
    pub hilbert: HilbertConfig,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// How line segments between consecutive points are colored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentColoring {
    /// Step through the default qualitative palette, one color per segment
    #[default]
    Cycle,
    /// Sample the nipy_spectral color map by segment position
    ColorMap,
}

impl FromStr for SegmentColoring {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cycle" => Ok(Self::Cycle),
            "color_map" | "colormap" => Ok(Self::ColorMap),
            other => Err(format!("unknown segment coloring '{}'", other)),
        }
    }
}

impl fmt::Display for SegmentColoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle => write!(f, "cycle"),
            Self::ColorMap => write!(f, "color_map"),
        }
    }
}

/// What to do with an input line that does not parse as a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Abort the run on the first malformed line
    #[default]
    FailFast,
    /// Log the line at warn level and continue
    SkipAndWarn,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail_fast" | "fail-fast" => Ok(Self::FailFast),
            "skip_and_warn" | "skip-and-warn" | "skip" => Ok(Self::SkipAndWarn),
            other => Err(format!("unknown malformed-line policy '{}'", other)),
        }
    }
}

/// Figure rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// Optional caption drawn above the plot
    pub title: Option<String>,

    /// Figure width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Figure height in pixels
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Background color (hex format)
    #[validate(length(equal = 7, message = "Background color must be 7 characters (e.g., #FFFFFF)"))]
    pub background_color: String,

    /// Scatter marker radius in pixels
    #[validate(range(min = 1, max = 50, message = "Marker size must be between 1 and 50"))]
    pub marker_size: u32,

    /// Segment stroke width in pixels
    #[validate(range(min = 1, max = 20, message = "Line width must be between 1 and 20"))]
    pub line_width: u32,

    /// Segment color policy
    pub segment_coloring: SegmentColoring,

    /// Index distance between the two ends of a 3D path segment
    #[validate(range(min = 1, message = "Stride must be at least 1"))]
    pub stride: usize,

    /// Whether to draw axes, ticks and labels
    pub show_axes: bool,

    /// Shrink margins around the plot area
    pub tight_layout: bool,

    /// Font family for captions and tick labels
    pub font_family: String,

    /// Font size for tick labels
    #[validate(range(min = 8, max = 72, message = "Font size must be between 8 and 72"))]
    pub font_size: u32,
}

/// Point input configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Malformed line handling
    pub malformed_policy: MalformedPolicy,

    /// Echo every accepted input line to stdout
    pub echo: bool,
}

/// Hilbert point generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HilbertConfig {
    /// Number of coordinate axes
    #[validate(range(min = 2, max = 3, message = "Only 2 or 3 dimensions are supported"))]
    pub dims: usize,

    /// Bits per axis; coordinates lie in [0, 2^order)
    #[validate(range(min = 1, max = 32, message = "Order must be between 1 and 32"))]
    pub order: u32,

    /// Number of random points to generate
    #[validate(range(min = 1, message = "At least one point must be generated"))]
    pub npoints: usize,

    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directives: a bare level or comma-separated `target=level` items
    pub level: String,

    /// Output format (pretty, compact, full)
    pub format: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Log span open and close events
    pub spans: bool,

    /// Show the module target of each event
    pub targets: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 800,
            height: 600,
            background_color: "#FFFFFF".to_string(),
            marker_size: 4,
            line_width: 1,
            segment_coloring: SegmentColoring::Cycle,
            stride: 1,
            show_axes: true,
            tight_layout: true,
            font_family: "sans-serif".to_string(),
            font_size: 12,
        }
    }
}

impl Default for HilbertConfig {
    fn default() -> Self {
        Self {
            dims: 3,
            order: 2,
            npoints: 64,
            seed: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            file: None,
            spans: false,
            targets: true,
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.render.validate()?;
        self.render.validate_colors()?;
        self.hilbert.validate()?;
        self.hilbert.validate_capacity()?;
        self.logging.validate_logging()?;
        Ok(())
    }
}

impl RenderConfig {
    /// Check color fields against the hex color pattern
    pub fn validate_colors(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();

        if let Err(err) = crate::validation::validate_hex_color(&self.background_color) {
            errors.add("background_color", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl HilbertConfig {
    /// Cross-field check that the lattice can hold the requested points
    pub fn validate_capacity(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();

        if let Err(err) =
            crate::validation::validate_hilbert_capacity(self.dims, self.order, self.npoints)
        {
            errors.add("npoints", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl LoggingSettings {
    /// Custom validation for logging configuration
    pub fn validate_logging(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();

        if let Err(err) = crate::validation::validate_log_level(&self.level) {
            errors.add("level", err);
        }

        if let Err(err) = crate::validation::validate_log_format(&self.format) {
            errors.add("format", err);
        }

        if let Some(ref file) = self.file {
            if let Err(err) = crate::validation::validate_file_path(file) {
                errors.add("file", err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<&LoggingSettings> for hplot_common::LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            format: settings
                .format
                .parse()
                .unwrap_or(hplot_common::LogFormat::Compact),
            file_path: settings.file.clone(),
            include_spans: settings.spans,
            include_targets: settings.targets,
        }
    }
}
