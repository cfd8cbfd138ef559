//! Error handling module for the qlext CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. The scanner itself never
//! fails; everything here comes from the surrounding I/O and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the qlext CLI application.
#[derive(Error, Debug)]
pub enum QlextError {
    /// Error when configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("Cannot read {}: {source}", path.display())]
    ReadInput {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when a query fails a check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using QlextError.
pub type Result<T> = std::result::Result<T, QlextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = QlextError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = QlextError::Validation("2 unterminated phrase(s)".to_string());
        assert_eq!(err.to_string(), "Validation error: 2 unterminated phrase(s)");
    }

    #[test]
    fn test_read_input_display() {
        let err = QlextError::ReadInput {
            path: PathBuf::from("queries.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "Cannot read queries.txt: file not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: QlextError = io_err.into();
        assert!(matches!(err, QlextError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: QlextError = json_err.into();
        assert!(matches!(err, QlextError::Json(_)));
    }
}
