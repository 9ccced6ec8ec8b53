//! HTTP backend abstraction for the Fauna query API.
//!
//! Queries are JSON documents POSTed to the endpoint root. The production
//! backend uses reqwest with automatic retry for transient errors; tests
//! swap in [`testing::FakeBackend`].

use crate::error::{FaunaError, FaunaResult};
use crate::models::FaunaConfig;
use crate::parsing::parse_query_error;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST a JSON query and decode the reply.
///
/// This is an implementation detail - external code should use the
/// `DocumentSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` to `url` and deserialize the successful response.
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &Value,
    ) -> FaunaResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Server errors (5xx) and network errors are retried with exponential
/// backoff. Client errors fail immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
    secret: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &FaunaConfig) -> FaunaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
            secret: config.secret.clone(),
        })
    }

    fn build_request(&self, url: &Url, body: &Value) -> reqwest::RequestBuilder {
        let request = self.client.post(url.as_str()).json(body);
        match self.secret {
            Some(ref secret) => request.bearer_auth(secret),
            None => request,
        }
    }

    /// Send a query with automatic retry for transient errors.
    async fn send_with_retry(&self, url: &Url, body: &Value) -> FaunaResult<reqwest::Response> {
        let mut last_error: Option<FaunaError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay_ms, attempt);
                warn!(
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %last_error.as_ref().map_or_else(String::new, ToString::to_string),
                    "Retrying Fauna query"
                );
                tokio::time::sleep(delay).await;
            }

            match self.build_request(url, body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let text = response.text().await.unwrap_or_default();
                    let error = error_from_status(status.as_u16(), url, &text);

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(error);
                        continue;
                    }

                    return Err(error);
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| FaunaError::InvalidResponse {
            message: "Unknown error during query".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &Value,
    ) -> FaunaResult<T> {
        let response = self.send_with_retry(url, body).await?;
        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "Fauna query succeeded");
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Delay before retry number `attempt` (1-based): `base * 2^(attempt - 1)`.
fn backoff_delay(base_ms: u64, attempt: u8) -> Duration {
    let exponent = u32::from(attempt.saturating_sub(1));
    Duration::from_millis(base_ms.saturating_mul(2u64.saturating_pow(exponent)))
}

/// Build the error for a non-success response.
///
/// Fauna reports most failures as `{"errors": [...]}`; anything else (a
/// proxy page, an empty body) becomes a bare status error.
pub(crate) fn error_from_status(status: u16, url: &Url, body: &str) -> FaunaError {
    match parse_query_error(body) {
        Some((code, description)) => FaunaError::QueryFailed {
            status,
            code,
            description,
        },
        None => FaunaError::ApiRequestFailed {
            status,
            url: url.to_string(),
        },
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        /// 200 with this JSON body
        Ok(Value),
        /// Non-success status with this raw body
        Err { status: u16, body: String },
    }

    /// A fake HTTP backend that answers queries by matching their body.
    ///
    /// Each rule is a substring of the serialized query; the first matching
    /// rule wins. Every request body is recorded for later inspection.
    #[derive(Default)]
    pub struct FakeBackend {
        rules: Vec<(String, CannedResponse)>,
        requests: Mutex<Vec<Value>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer queries containing `body_contains` with `response`.
        pub fn with_response(mut self, body_contains: &str, response: CannedResponse) -> Self {
            self.rules.push((body_contains.to_string(), response));
            self
        }

        /// Query bodies received so far.
        pub fn requests(&self) -> Vec<Value> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            body: &Value,
        ) -> FaunaResult<T> {
            self.requests.lock().unwrap().push(body.clone());
            let serialized = body.to_string();

            let response = self
                .rules
                .iter()
                .find(|(pattern, _)| serialized.contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
                .ok_or_else(|| FaunaError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                })?;

            match response {
                CannedResponse::Ok(json) => Ok(serde_json::from_value(json)?),
                CannedResponse::Err { status, body } => Err(error_from_status(status, url, &body)),
            }
        }
    }
}
