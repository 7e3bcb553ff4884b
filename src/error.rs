//! Error types for Aieth
//!
//! This module defines the error types used throughout the client,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Aieth operations
///
/// Covers configuration loading, requests to the assistant endpoint,
/// and terminal input handling.
#[derive(Error, Debug)]
pub enum AiethError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request could not be sent or its response could not be read
    #[error("Request error: {0}")]
    Request(String),

    /// The assistant endpoint answered with a non-2xx status
    #[error("Endpoint returned status {status}: {body}")]
    Status {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Line editor errors
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for Aieth operations
///
/// Uses `anyhow::Error` so callers can attach context while still being able
/// to downcast to [`AiethError`].
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = AiethError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_request_error_display() {
        let error = AiethError::Request("connection refused".to_string());
        assert_eq!(error.to_string(), "Request error: connection refused");
    }

    #[test]
    fn test_status_error_display() {
        let error = AiethError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Endpoint returned status 503: unavailable"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: AiethError = io_error.into();
        assert!(matches!(error, AiethError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: AiethError = json_error.into();
        assert!(matches!(error, AiethError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: AiethError = yaml_error.into();
        assert!(matches!(error, AiethError::Yaml(_)));
    }

    #[test]
    fn test_error_downcasts_through_anyhow() {
        let result: Result<()> = Err(AiethError::Config("bad".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AiethError>(),
            Some(AiethError::Config(_))
        ));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AiethError>();
    }
}
