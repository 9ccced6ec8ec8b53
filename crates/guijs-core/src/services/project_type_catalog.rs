//! Project type catalog - lazily populated, process-lifetime cache.

use futures_util::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::LazyCollection;
use crate::config::{CatalogConfig, TruncationPolicy};
use crate::domain::ProjectType;
use crate::error::{CatalogError, CatalogResult};
use crate::ports::{DocumentSourcePort, SourceDocument};

/// Read access to the project types held by the document source.
///
/// The dataset is fetched at most once for the life of the catalog: the
/// first call that needs it paginates the index, resolves every document
/// and stores the result. Concurrent first calls share that one fetch.
/// A failed fetch stores nothing and the next call tries again.
///
/// Every accessor populates on demand, so callers never see an empty
/// result that merely means "not loaded yet". Use [`snapshot`](Self::snapshot)
/// to look without triggering a fetch.
pub struct ProjectTypeCatalog {
    source: Arc<dyn DocumentSourcePort>,
    config: CatalogConfig,
    records: LazyCollection<ProjectType, CatalogError>,
}

impl ProjectTypeCatalog {
    /// Create an empty catalog reading from `source`.
    pub fn new(source: Arc<dyn DocumentSourcePort>, config: CatalogConfig) -> Self {
        Self {
            source,
            config,
            records: LazyCollection::new(),
        }
    }

    /// Populate the catalog if it is not populated yet.
    ///
    /// Safe to call any number of times, from any number of tasks.
    pub async fn ensure_populated(&self) -> CatalogResult<()> {
        self.records().await.map(|_| ())
    }

    /// All project types, in index order.
    pub async fn get_all(&self) -> CatalogResult<Arc<[ProjectType]>> {
        self.records().await
    }

    /// The project type with the given id, if there is one.
    ///
    /// A miss is `Ok(None)`. Errors only come from populating.
    pub async fn get_by_id(&self, id: &str) -> CatalogResult<Option<ProjectType>> {
        let records = self.records().await?;
        Ok(records.iter().find(|project_type| project_type.id == id).cloned())
    }

    /// The populated collection, or `None` if it is not loaded yet.
    pub fn snapshot(&self) -> Option<Arc<[ProjectType]>> {
        self.records.get()
    }

    /// Whether the dataset has been loaded.
    pub fn is_populated(&self) -> bool {
        self.records.is_populated()
    }

    /// Absolute logo URL for a project type under the configured origin.
    pub fn logo_url(&self, project_type: &ProjectType) -> String {
        self.config.logo_origin.url_for(&project_type.logo_path)
    }

    /// Configuration this catalog was built with.
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn records(&self) -> CatalogResult<Arc<[ProjectType]>> {
        let source = Arc::clone(&self.source);
        let config = self.config.clone();
        self.records
            .get_or_populate(move || fetch_project_types(source, config))
            .await
    }
}

impl std::fmt::Debug for ProjectTypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectTypeCatalog")
            .field("config", &self.config)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

async fn fetch_project_types(
    source: Arc<dyn DocumentSourcePort>,
    config: CatalogConfig,
) -> CatalogResult<Vec<ProjectType>> {
    let started = Instant::now();
    info!(
        target: "guijs.catalog",
        index = %config.index_name,
        page_size = config.page_size,
        "Populating project type catalog"
    );

    let result = load(source.as_ref(), &config).await;

    match &result {
        Ok(records) => info!(
            target: "guijs.catalog",
            count = records.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Project type catalog populated"
        ),
        Err(e) => error!(
            target: "guijs.catalog",
            error = %e,
            transient = e.is_transient(),
            "Project type catalog population failed"
        ),
    }

    result
}

async fn load(
    source: &dyn DocumentSourcePort,
    config: &CatalogConfig,
) -> CatalogResult<Vec<ProjectType>> {
    let page = source.paginate(&config.index_name, config.page_size).await?;
    debug!(
        target: "guijs.catalog",
        refs = page.refs.len(),
        has_more = page.has_more,
        "Fetched index page"
    );

    if page.has_more {
        match config.truncation {
            TruncationPolicy::Warn => warn!(
                target: "guijs.catalog",
                index = %config.index_name,
                page_size = config.page_size,
                "Index has more entries than one page; catalog will be incomplete"
            ),
            TruncationPolicy::Fail => {
                return Err(CatalogError::TruncatedDataset {
                    page_size: config.page_size,
                });
            }
        }
    }

    // `buffered` keeps results in page order whatever order they finish in.
    let documents: Vec<SourceDocument> = stream::iter(page.refs)
        .map(|reference| async move { source.resolve(&reference).await })
        .buffered(config.resolve_concurrency.max(1))
        .try_collect()
        .await?;

    documents
        .iter()
        .map(|document| ProjectType::from_document(document).map_err(CatalogError::from))
        .collect()
}
