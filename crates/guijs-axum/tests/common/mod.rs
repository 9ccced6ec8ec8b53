//! Shared fixtures for guijs-axum integration tests.

use async_trait::async_trait;
use guijs_core::{
    DocumentRef, DocumentSourcePort, SourceDocument, SourcePage, SourcePortResult,
};
use mockall::mock;
use serde_json::json;

mock! {
    pub Source {}

    #[async_trait]
    impl DocumentSourcePort for Source {
        async fn paginate(&self, index: &str, size: u32) -> SourcePortResult<SourcePage>;
        async fn resolve(&self, reference: &DocumentRef) -> SourcePortResult<SourceDocument>;
    }
}

/// Collection the fixtures live in.
pub const COLLECTION: &str = "projecttypes";

/// `(id, name)` pairs in index order.
pub const FIXTURES: &[(&str, &str)] = &[("3", "Angular"), ("2", "React"), ("1", "Vue")];

/// A page listing every fixture.
pub fn fixture_page() -> SourcePage {
    SourcePage {
        refs: FIXTURES
            .iter()
            .map(|(id, _)| DocumentRef::new(COLLECTION, *id))
            .collect(),
        has_more: false,
    }
}

/// The document for a fixture reference.
pub fn fixture_document(reference: &DocumentRef) -> SourceDocument {
    let name = FIXTURES
        .iter()
        .find(|(id, _)| *id == reference.id)
        .map_or("Unknown", |(_, name)| *name);
    let slug = name.to_lowercase();

    SourceDocument {
        reference: reference.clone(),
        ts: Some(1_580_000_000_000_000),
        data: json!({ "name": name, "slug": slug, "logo": format!("/logos/{slug}.png") })
            .as_object()
            .cloned()
            .unwrap_or_default(),
    }
}

/// A source that serves the fixtures, paginating exactly once.
pub fn fixture_source() -> MockSource {
    let mut source = MockSource::new();
    source
        .expect_paginate()
        .times(1)
        .returning(|_, _| Ok(fixture_page()));
    source
        .expect_resolve()
        .returning(|reference| Ok(fixture_document(reference)));
    source
}
