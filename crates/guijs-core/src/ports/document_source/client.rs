//! Document source port trait.

use super::error::SourcePortResult;
use super::types::{DocumentRef, SourceDocument, SourcePage};
use async_trait::async_trait;

/// Port trait for reading documents from an index-backed document store.
///
/// This trait defines the interface that the core domain uses to talk to
/// the document database. The implementation lives in `guijs-fauna`.
///
/// # Design
///
/// - Uses core-owned DTOs, not vendor wire types
/// - Returns `SourcePortError` for all failures
/// - Pagination yields references only; each one is dereferenced with
///   [`resolve`](Self::resolve)
#[async_trait]
pub trait DocumentSourcePort: Send + Sync {
    /// Read one page of references from an index.
    ///
    /// Results come back in index order. `size` is the maximum number of
    /// entries the page may hold; the returned page reports whether more
    /// entries exist beyond it.
    async fn paginate(&self, index: &str, size: u32) -> SourcePortResult<SourcePage>;

    /// Dereference a document reference into the full document.
    async fn resolve(&self, reference: &DocumentRef) -> SourcePortResult<SourceDocument>;
}
