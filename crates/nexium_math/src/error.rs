//! Error types for the math library
//!
//! The numeric API itself never fails. Errors only come out of the text
//! parsers used when values are read from configuration files.

use thiserror::Error;

/// Math library errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Hex color string has the wrong number of digits
    #[error("Invalid hex color length {len} in {input:?} (expected 3, 4, 6 or 8 digits)")]
    InvalidHexLength { input: String, len: usize },

    /// Hex color string contains a non-hex character
    #[error("Invalid hex digit {digit:?} in color {input:?}")]
    InvalidHexDigit { input: String, digit: char },

    /// Easing curve name is not known
    #[error("Unknown easing curve: {0}")]
    UnknownEase(String),
}

/// Result type for math parsing operations
pub type Result<T> = std::result::Result<T, MathError>;
