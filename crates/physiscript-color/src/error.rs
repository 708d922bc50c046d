//! Error types for the color system

use thiserror::Error;

/// Errors that can occur when working with colors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Color not found by name
    #[error("Color not found: {0}")]
    NotFound(String),

    /// Invalid color value
    #[error("Invalid color value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColorError::NotFound("vermillion".to_string());
        assert_eq!(format!("{}", err), "Color not found: vermillion");

        let err = ColorError::InvalidValue("channel out of range".to_string());
        assert_eq!(format!("{}", err), "Invalid color value: channel out of range");
    }
}
