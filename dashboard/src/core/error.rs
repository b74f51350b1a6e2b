//! # Common Error Types
//!
//! Consolidated error handling for the dashboard application.
//!
//! ## Error Categories
//!
//! - **Api**: market-data API communication errors (network, HTTP, JSON)
//! - **Config**: configuration file load/save errors
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use dashboard::core::error::{AppError, Result};
//!
//! fn read_saved_theme(raw: &str) -> Result<serde_json::Value> {
//!     let value = serde_json::from_str(raw)?; // serde errors become Config
//!     Ok(value)
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive message; `thiserror` provides the
/// `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Market-data API communication error: network failures, non-success
    /// HTTP statuses, malformed JSON.
    #[error("API error: {0}")]
    Api(String),

    /// Configuration file could not be read, parsed, or written.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the dashboard crate.
pub type Result<T> = std::result::Result<T, AppError>;

// Fetch tasks ship their failures across the event channel as plain strings;
// the receiving side lifts them back into the API category.
impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Api("connection timeout".to_string()).to_string(),
            "API error: connection timeout"
        );
        assert_eq!(
            AppError::Config("missing file".to_string()).to_string(),
            "config error: missing file"
        );
    }

    #[test]
    fn test_string_converts_to_api_error() {
        let err: AppError = "boom".to_string().into();
        assert!(matches!(err, AppError::Api(_)));
    }
}
