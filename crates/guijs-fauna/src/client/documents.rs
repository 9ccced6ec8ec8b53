//! Document retrieval.

use guijs_core::{DocumentRef, SourceDocument};

use super::FaunaClient;
use crate::error::{FaunaError, FaunaResult};
use crate::http::HttpBackend;
use crate::parsing::parse_document;
use crate::query::get_document_query;

impl<B: HttpBackend> FaunaClient<B> {
    /// Fetch the document at `reference`.
    pub(crate) async fn get_document(
        &self,
        reference: &DocumentRef,
    ) -> FaunaResult<SourceDocument> {
        let resource = self.query(&get_document_query(reference)).await?;
        let document = parse_document(&resource)?;

        if document.reference != *reference {
            return Err(FaunaError::InvalidResponse {
                message: format!(
                    "requested {reference} but Fauna returned {}",
                    document.reference
                ),
            });
        }

        Ok(document)
    }
}
