//! Error types for document source port operations.

use thiserror::Error;

/// Errors from document source port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
/// The type is `Clone` so a single failure can be handed to every caller
/// waiting on the same population.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourcePortError {
    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The source rejected our credentials.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Description returned by the source
        message: String,
    },

    /// Request rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// A referenced index or document does not exist.
    #[error("Not found: {message}")]
    NotFound {
        /// What could not be found
        message: String,
    },

    /// The source evaluated the query and reported an error.
    #[error("Query failed ({code}): {description}")]
    QueryFailed {
        /// Machine-readable error code
        code: String,
        /// Human-readable description
        description: String,
    },

    /// Invalid response from the source.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for document source port operations.
pub type SourcePortResult<T> = Result<T, SourcePortError>;
