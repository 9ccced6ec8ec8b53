//! Index pagination.

use guijs_core::SourcePage;
use tracing::debug;

use super::FaunaClient;
use crate::error::FaunaResult;
use crate::http::HttpBackend;
use crate::parsing::parse_page;
use crate::query::index_page_query;

impl<B: HttpBackend> FaunaClient<B> {
    /// Fetch the first page of `index`, up to `size` entries.
    pub(crate) async fn paginate_index(&self, index: &str, size: u32) -> FaunaResult<SourcePage> {
        let resource = self.query(&index_page_query(index, size)).await?;
        let page = parse_page(&resource)?;
        debug!(index, size, refs = page.refs.len(), has_more = page.has_more, "Paginated index");
        Ok(page)
    }
}
