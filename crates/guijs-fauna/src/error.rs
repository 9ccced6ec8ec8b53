//! Error types for Fauna operations.
//!
//! These errors are internal to the adapter and are mapped to core port
//! errors at the boundary. Only construction errors escape the crate.

use thiserror::Error;

/// Result type alias for Fauna operations.
pub type FaunaResult<T> = Result<T, FaunaError>;

/// Errors related to Fauna API operations.
#[derive(Debug, Error)]
pub enum FaunaError {
    /// Request failed with an HTTP error status and no query error payload.
    #[error("Fauna request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Fauna evaluated the query and returned an error payload.
    #[error("Fauna query failed with status {status} ({code}): {description}")]
    QueryFailed {
        /// HTTP status code
        status: u16,
        /// Fauna error code, e.g. `instance not found`
        code: String,
        /// Human-readable description
        description: String,
    },

    /// Response body did not have the expected shape.
    #[error("Invalid response from Fauna: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = FaunaError::ApiRequestFailed {
            status: 503,
            url: "https://db.fauna.com/".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("db.fauna.com"));
    }

    #[test]
    fn test_query_failed_error_message() {
        let error = FaunaError::QueryFailed {
            status: 404,
            code: "instance not found".to_string(),
            description: "Set not found.".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("instance not found"));
        assert!(msg.contains("Set not found."));
    }

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: FaunaError = err.into();
        assert!(matches!(error, FaunaError::JsonParse(_)));
    }
}
