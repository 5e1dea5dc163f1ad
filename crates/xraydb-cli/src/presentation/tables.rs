//! Table formatting utilities for CLI output.

use std::fmt::Display;

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

/// Format a number with up to six significant decimals, trimming zeros.
///
/// ```rust
/// use xraydb_cli::presentation::format_value;
///
/// assert_eq!(format_value(6403.84), "6403.84");
/// assert_eq!(format_value(2.0), "2");
/// ```
pub fn format_value(value: f64) -> String {
    let text = format!("{value:.6}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
