//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Number of bits a Hilbert index may occupy
pub const MAX_HILBERT_BITS: u32 = 64;

/// Validate a `#RRGGBB` color string
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_REGEX.is_match(color) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_hex_color"))
    }
}

/// Comma-separated `EnvFilter` directives, each a level or `target=level`
pub static LOG_DIRECTIVES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[a-z_][a-z0-9_:.\-]*=)?(?:trace|debug|info|warn|error|off)\s*(?:,\s*(?:[a-z_][a-z0-9_:.\-]*=)?(?:trace|debug|info|warn|error|off)\s*)*$",
    )
    .expect("Invalid log directive regex pattern")
});

/// Validate a log filter: a bare level (`debug`) or per-target directives
/// (`hplot_graphs=trace,warn`)
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_DIRECTIVES_REGEX.is_match(level) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Validate a log output format name
pub fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match format {
        "pretty" | "compact" | "full" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_format")),
    }
}

/// Check that a Hilbert lattice of `dims` axes at `order` bits per axis fits
/// in a 64-bit index and can hold `npoints` points
pub fn validate_hilbert_capacity(
    dims: usize,
    order: u32,
    npoints: usize,
) -> Result<(), ValidationError> {
    let bits = dims as u64 * order as u64;
    if bits > MAX_HILBERT_BITS as u64 {
        return Err(ValidationError::new("hilbert_index_overflow"));
    }

    let capacity: u128 = 1u128 << bits;
    if npoints as u128 > capacity {
        return Err(ValidationError::new("npoints_exceeds_capacity"));
    }

    Ok(())
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}
