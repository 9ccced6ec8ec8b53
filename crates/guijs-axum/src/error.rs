//! Axum-specific error types and mappings.
//!
//! Maps catalog errors to HTTP status codes and JSON response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use guijs_core::CatalogError;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Axum-specific error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The document source could not be reached or returned partial data.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl HttpError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg) | Self::ServiceUnavailable(msg) | Self::Internal(msg) => msg,
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        // The catalog already logged the failed population.
        debug!(error = %err, "Catalog request failed");
        match err {
            CatalogError::SourceUnavailable(source) => Self::ServiceUnavailable(source.to_string()),
            truncated @ CatalogError::TruncatedDataset { .. } => {
                Self::ServiceUnavailable(truncated.to_string())
            }
            CatalogError::InvalidDocument(shape) => Self::Internal(shape.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guijs_core::{DocumentRef, DocumentShapeError, SourcePortError};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_source_errors_are_unavailable() {
        let err: HttpError = CatalogError::SourceUnavailable(SourcePortError::RateLimited).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let err: HttpError = CatalogError::TruncatedDataset { page_size: 10 }.into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_document_is_internal() {
        let err: HttpError = CatalogError::InvalidDocument(DocumentShapeError::MissingField {
            reference: DocumentRef::new("projecttypes", "1"),
            field: "logo",
        })
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("logo"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_conversion_does_not_log_above_debug() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let err: HttpError = CatalogError::SourceUnavailable(SourcePortError::Network {
                message: "connection refused".to_string(),
            })
            .into();
            assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_response_status() {
        let response = HttpError::NotFound("Project type 9".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
