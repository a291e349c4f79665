//! Common error handling and logging for hplot

pub mod error;
pub mod logging;
pub mod macros;

// Re-export commonly used types
pub use error::{HPlotError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
