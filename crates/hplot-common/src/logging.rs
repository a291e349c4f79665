//! Structured logging infrastructure for hplot
//!
//! Everything is written to stderr (or a file) because stdout carries point
//! data for `hilbert-order` and echoed input for the viewers.

use std::io;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, colored output for interactive use
    Pretty,
    /// Single-line output
    Compact,
    /// The default tracing-subscriber line format
    Full,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives (e.g., "info", "debug", "hplot_graphs=trace")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Build the filter, letting `RUST_LOG` win over the configured level
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the tracing subscriber with the given configuration
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = build_filter(&config.level);

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let base = fmt::layer()
        .with_span_events(span_events)
        .with_target(config.include_targets);

    let result = match (config.format, config.file_path) {
        (LogFormat::Pretty, Some(path)) => {
            let file = open_log_file(&path)?;
            registry
                .with(base.pretty().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
        (LogFormat::Pretty, None) => registry.with(base.pretty().with_writer(io::stderr)).try_init(),
        (LogFormat::Compact, Some(path)) => {
            let file = open_log_file(&path)?;
            registry
                .with(base.compact().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
        (LogFormat::Compact, None) => registry.with(base.compact().with_writer(io::stderr)).try_init(),
        (LogFormat::Full, Some(path)) => {
            let file = open_log_file(&path)?;
            registry.with(base.with_ansi(false).with_writer(Mutex::new(file))).try_init()
        }
        (LogFormat::Full, None) => registry.with(base.with_writer(io::stderr)).try_init(),
    };

    if let Err(err) = result {
        tracing::debug!("logging already initialized: {}", err);
    }

    Ok(())
}

fn open_log_file(path: &str) -> io::Result<std::fs::File> {
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}
