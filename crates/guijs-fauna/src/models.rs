//! Internal wire types for the Fauna query API.
//!
//! These types are internal to `guijs-fauna` and are not exposed to consumers.
//! External consumers should use the port DTOs defined in `guijs-core`.

use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Key of a tagged reference value: `{"@ref": {...}}`.
pub const REF_TAG: &str = "@ref";

/// Key of an escaped object value: `{"@obj": {...}}`.
pub const OBJ_TAG: &str = "@obj";

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Fauna client.
#[derive(Debug, Clone)]
pub struct FaunaConfig {
    /// Query endpoint
    pub endpoint: Url,
    /// Database secret sent as bearer token
    pub secret: Option<String>,
    /// User agent for HTTP requests
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

// ============================================================================
// Response Envelopes
// ============================================================================

/// Successful query response: `{"resource": ...}`.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    /// Evaluated query result
    pub resource: Value,
}

/// Failed query response: `{"errors": [...]}`.
#[derive(Debug, Deserialize)]
pub struct QueryErrorBody {
    /// Errors reported by the server, most relevant first
    pub errors: Vec<QueryErrorEntry>,
}

/// A single query error.
#[derive(Debug, Deserialize)]
pub struct QueryErrorEntry {
    /// Machine-readable code, e.g. `unauthorized`, `instance not found`
    pub code: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}
