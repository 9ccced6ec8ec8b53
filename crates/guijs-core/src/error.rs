//! Errors surfaced by the project type catalog.

use thiserror::Error;

use crate::domain::DocumentShapeError;
use crate::ports::SourcePortError;

/// Errors from populating the project type catalog.
///
/// Lookups that simply find nothing are not errors; they return `None`.
/// Every variant leaves the catalog unpopulated, so retrying is always
/// possible. `Clone` lets one failed population be reported to every
/// caller that was waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The document source could not be read.
    #[error("Project type source unavailable: {0}")]
    SourceUnavailable(#[from] SourcePortError),

    /// A resolved document does not describe a project type.
    #[error("Invalid project type document: {0}")]
    InvalidDocument(#[from] DocumentShapeError),

    /// The index has more entries than a single page returns.
    #[error("Project type index holds more than {page_size} entries")]
    TruncatedDataset {
        /// Page size that was requested
        page_size: u32,
    },
}

impl CatalogError {
    /// Whether retrying later can reasonably succeed without changing data
    /// or configuration.
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable(
                SourcePortError::Network { .. } | SourcePortError::RateLimited
            )
        )
    }
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
