//! Error types for Hooksmith Core.

use thiserror::Error;

/// Result type alias for Hooksmith operations.
pub type Result<T> = std::result::Result<T, HookError>;

/// Body of the 400 response when a required field is missing.
pub const MISSING_FIELD_MESSAGE: &str = "Missing product description or target audience";

/// Body of the 500 response when generation fails for any reason.
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate hooks from AI";

/// Message the form shows for any failed request.
pub const FORM_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Main error type for Hooksmith.
#[derive(Debug, Error)]
pub enum HookError {
    /// Product description or target audience is absent or empty.
    #[error("Missing product description or target audience")]
    MissingField,

    /// AI provider returned an error or an unusable reply.
    #[error("AI provider error: {0}")]
    ProviderError(String),

    /// Network request failed.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The hook service answered with a non-OK status.
    #[error("Request failed with status {0}")]
    RequestFailed(u16),

    /// IO operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl HookError {
    /// Whether this error surfaces to clients as a generation failure (HTTP 500).
    pub fn is_generation_failure(&self) -> bool {
        !matches!(self, HookError::MissingField)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        assert_eq!(HookError::MissingField.to_string(), MISSING_FIELD_MESSAGE);
        assert!(!HookError::MissingField.is_generation_failure());
    }

    #[test]
    fn test_generation_failures() {
        assert!(HookError::ProviderError("boom".into()).is_generation_failure());
        assert!(HookError::NetworkError("reset".into()).is_generation_failure());
        assert!(HookError::ConfigError("no key".into()).is_generation_failure());
    }
}
