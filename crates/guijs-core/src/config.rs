//! Configuration for the project type catalog.

use crate::domain::LogoOrigin;

/// Index that lists project types sorted by name, ascending.
pub const DEFAULT_INDEX_NAME: &str = "projecttypes_sort_by_name_asc";

/// Page size used to read the whole index in one request.
pub const DEFAULT_PAGE_SIZE: u32 = 10_000;

/// Number of document resolutions kept in flight at once.
pub const DEFAULT_RESOLVE_CONCURRENCY: usize = 16;

/// What to do when the index holds more entries than one page returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TruncationPolicy {
    /// Keep the first page and log a warning.
    #[default]
    Warn,
    /// Fail the population with `CatalogError::TruncatedDataset`.
    Fail,
}

/// Configuration for [`ProjectTypeCatalog`](crate::services::ProjectTypeCatalog).
///
/// # Example
///
/// ```
/// use guijs_core::config::{CatalogConfig, TruncationPolicy};
///
/// let config = CatalogConfig::new()
///     .with_page_size(500)
///     .with_truncation(TruncationPolicy::Fail)
///     .with_logo_origin("http://localhost:8080");
/// assert_eq!(config.page_size, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Index to paginate.
    pub index_name: String,
    /// Maximum number of entries requested from the index.
    pub page_size: u32,
    /// Behavior when the index has more entries than `page_size`.
    pub truncation: TruncationPolicy,
    /// Origin prefixed to logo paths.
    pub logo_origin: LogoOrigin,
    /// Maximum concurrent document resolutions (at least 1).
    pub resolve_concurrency: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            truncation: TruncationPolicy::default(),
            logo_origin: LogoOrigin::default(),
            resolve_concurrency: DEFAULT_RESOLVE_CONCURRENCY,
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index to paginate.
    #[must_use]
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Set the page size.
    ///
    /// Defaults to 10000. Zero is raised to 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the truncation policy.
    #[must_use]
    pub const fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    /// Set the logo origin.
    #[must_use]
    pub fn with_logo_origin(mut self, origin: impl Into<String>) -> Self {
        self.logo_origin = LogoOrigin::new(origin);
        self
    }

    /// Set how many documents may be resolved concurrently.
    ///
    /// Defaults to 16. Zero is raised to 1.
    #[must_use]
    pub fn with_resolve_concurrency(mut self, concurrency: usize) -> Self {
        self.resolve_concurrency = concurrency.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::new();
        assert_eq!(config.index_name, "projecttypes_sort_by_name_asc");
        assert_eq!(config.page_size, 10_000);
        assert_eq!(config.truncation, TruncationPolicy::Warn);
        assert_eq!(config.logo_origin.as_str(), "https://awesomejs.dev");
        assert_eq!(config.resolve_concurrency, 16);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CatalogConfig::new()
            .with_index_name("all_projecttypes")
            .with_page_size(64)
            .with_truncation(TruncationPolicy::Fail)
            .with_logo_origin("http://cdn.local")
            .with_resolve_concurrency(2);

        assert_eq!(config.index_name, "all_projecttypes");
        assert_eq!(config.page_size, 64);
        assert_eq!(config.truncation, TruncationPolicy::Fail);
        assert_eq!(config.logo_origin.as_str(), "http://cdn.local");
        assert_eq!(config.resolve_concurrency, 2);
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let config = CatalogConfig::new()
            .with_page_size(0)
            .with_resolve_concurrency(0);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.resolve_concurrency, 1);
    }
}
