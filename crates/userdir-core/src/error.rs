//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Record Source Errors
    // ─────────────────────────────────────────────────────────────
    /// Non-success HTTP status, transport failure, or a malformed envelope.
    #[error("Failed to fetch users: {reason}")]
    FetchFailure { reason: String },

    #[error("Invalid fetch request: {message}")]
    InvalidRequest { message: String },

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    /// Detail route reached without a record handle.
    #[error("User not found: {uuid}")]
    RecordNotFound { uuid: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn fetch_failure(reason: impl Into<String>) -> Self {
        Self::FetchFailure {
            reason: reason.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn record_not_found(uuid: impl Into<String>) -> Self {
        Self::RecordNotFound { uuid: uuid.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::fetch_failure("HTTP 503 Service Unavailable");
        assert_eq!(
            err.to_string(),
            "Failed to fetch users: HTTP 503 Service Unavailable"
        );

        let err = Error::record_not_found("abc-123");
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::fetch_failure("test");
        let _ = Error::invalid_request("test");
        let _ = Error::record_not_found("test");
        let _ = Error::config("test");
    }
}
