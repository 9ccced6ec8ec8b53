//! Port trait implementation for `FaunaClient`.
//!
//! This module implements the core-owned `DocumentSourcePort` trait for
//! `FaunaClient`, converting Fauna failures into port errors.

use async_trait::async_trait;
use guijs_core::{
    DocumentRef, DocumentSourcePort, SourceDocument, SourcePage, SourcePortError,
    SourcePortResult,
};

use crate::client::FaunaClient;
use crate::error::FaunaError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `FaunaError` to core `SourcePortError`.
///
/// The HTTP status decides first; a query error payload on any other status
/// is surfaced as `QueryFailed`.
fn map_error(err: FaunaError) -> SourcePortError {
    match err {
        FaunaError::ApiRequestFailed { status, url } => match status {
            401 | 403 => SourcePortError::Unauthorized {
                message: format!("status {status} from {url}"),
            },
            404 => SourcePortError::NotFound { message: url },
            429 => SourcePortError::RateLimited,
            _ => SourcePortError::Network {
                message: format!("request failed with status {status}: {url}"),
            },
        },
        FaunaError::QueryFailed {
            status,
            code,
            description,
        } => match status {
            401 | 403 => SourcePortError::Unauthorized {
                message: description,
            },
            404 => SourcePortError::NotFound {
                message: description,
            },
            429 => SourcePortError::RateLimited,
            500..=599 => SourcePortError::Network {
                message: format!("{code}: {description}"),
            },
            _ => SourcePortError::QueryFailed { code, description },
        },
        FaunaError::InvalidResponse { message } => SourcePortError::InvalidResponse { message },
        FaunaError::Network(e) => SourcePortError::Network {
            message: e.to_string(),
        },
        FaunaError::InvalidUrl(e) => SourcePortError::Configuration {
            message: e.to_string(),
        },
        FaunaError::JsonParse(e) => SourcePortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> DocumentSourcePort for FaunaClient<B> {
    async fn paginate(&self, index: &str, size: u32) -> SourcePortResult<SourcePage> {
        self.paginate_index(index, size).await.map_err(map_error)
    }

    async fn resolve(&self, reference: &DocumentRef) -> SourcePortResult<SourceDocument> {
        self.get_document(reference).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{test_config, wire_ref};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;
    use std::sync::Arc;

    fn query_failed(status: u16, code: &str) -> FaunaError {
        FaunaError::QueryFailed {
            status,
            code: code.to_string(),
            description: "described".to_string(),
        }
    }

    #[test]
    fn test_map_status_errors() {
        let api = |status| FaunaError::ApiRequestFailed {
            status,
            url: "https://db.fauna.com/".to_string(),
        };

        assert!(matches!(map_error(api(401)), SourcePortError::Unauthorized { .. }));
        assert!(matches!(map_error(api(403)), SourcePortError::Unauthorized { .. }));
        assert!(matches!(map_error(api(404)), SourcePortError::NotFound { .. }));
        assert_eq!(map_error(api(429)), SourcePortError::RateLimited);
        assert!(matches!(map_error(api(502)), SourcePortError::Network { .. }));
    }

    #[test]
    fn test_map_query_errors() {
        assert_eq!(
            map_error(query_failed(401, "unauthorized")),
            SourcePortError::Unauthorized {
                message: "described".to_string()
            }
        );
        assert!(matches!(
            map_error(query_failed(404, "instance not found")),
            SourcePortError::NotFound { .. }
        ));
        assert!(matches!(
            map_error(query_failed(503, "unavailable")),
            SourcePortError::Network { .. }
        ));
        assert_eq!(
            map_error(query_failed(400, "invalid ref")),
            SourcePortError::QueryFailed {
                code: "invalid ref".to_string(),
                description: "described".to_string()
            }
        );
    }

    #[test]
    fn test_map_decoding_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            map_error(json_err.into()),
            SourcePortError::InvalidResponse { .. }
        ));

        let url_err = url::Url::parse("::").unwrap_err();
        assert!(matches!(
            map_error(url_err.into()),
            SourcePortError::Configuration { .. }
        ));
    }

    #[tokio::test]
    async fn test_client_serves_as_port() {
        let backend = FakeBackend::new()
            .with_response(
                "paginate",
                CannedResponse::Ok(json!({
                    "resource": { "data": [["Vue", wire_ref("projecttypes", "1")]] }
                })),
            )
            .with_response(
                "get",
                CannedResponse::Ok(json!({
                    "resource": {
                        "ref": wire_ref("projecttypes", "1"),
                        "data": { "name": "Vue", "slug": "vue", "logo": "/vue.png" }
                    }
                })),
            );
        let port: Arc<dyn DocumentSourcePort> =
            Arc::new(FaunaClient::with_backend(test_config(), backend));

        let page = port.paginate("projecttypes_sort_by_name_asc", 10).await.unwrap();
        let document = port.resolve(&page.refs[0]).await.unwrap();
        assert_eq!(document.data["slug"], "vue");
    }

    #[tokio::test]
    async fn test_port_maps_unauthorized() {
        let backend = FakeBackend::new().with_response(
            "paginate",
            CannedResponse::Err {
                status: 401,
                body: r#"{"errors":[{"code":"unauthorized","description":"Unauthorized"}]}"#
                    .to_string(),
            },
        );
        let client = FaunaClient::with_backend(test_config(), backend);

        assert_eq!(
            client.paginate("projecttypes_sort_by_name_asc", 10).await,
            Err(SourcePortError::Unauthorized {
                message: "Unauthorized".to_string()
            })
        );
    }
}
