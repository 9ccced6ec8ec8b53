//! Fauna client for paginating indexes and fetching documents.

mod documents;
mod pagination;

use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::config::FaunaClientConfig;
use crate::error::FaunaResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{FaunaConfig, QueryResponse};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Fauna client using the reqwest HTTP backend.
pub type DefaultFaunaClient = FaunaClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Fauna query API.
///
/// Generic over an HTTP backend so tests can substitute canned responses.
/// Production code builds a [`DefaultFaunaClient`] and talks to it through
/// the `DocumentSourcePort` trait.
pub struct FaunaClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: FaunaConfig,
}

impl DefaultFaunaClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the endpoint is not a valid URL or the HTTP client cannot
    /// be built.
    pub fn new(config: &FaunaClientConfig) -> FaunaResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &FaunaClientConfig) -> FaunaResult<FaunaConfig> {
        Ok(FaunaConfig {
            endpoint: Url::parse(&config.endpoint)?,
            secret: config.secret.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
        })
    }
}

impl<B: HttpBackend> FaunaClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: FaunaConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Evaluate a query expression and return its `resource`.
    pub(crate) async fn query(&self, expr: &Value) -> FaunaResult<Value> {
        trace!(query = %expr, "Sending Fauna query");
        let response: QueryResponse = self.backend.post_json(&self.config.endpoint, expr).await?;
        Ok(response.resource)
    }
}
