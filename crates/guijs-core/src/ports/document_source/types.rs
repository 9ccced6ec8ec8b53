//! DTOs exchanged through the document source port.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Reference to a single document: its collection plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Collection the document lives in.
    pub collection: String,
    /// Document id, unique within the collection.
    pub id: String,
}

impl DocumentRef {
    /// Create a new document reference.
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// A fully resolved document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Reference the document was resolved from.
    pub reference: DocumentRef,
    /// Last-write timestamp reported by the source, in microseconds.
    pub ts: Option<i64>,
    /// Document body.
    pub data: Map<String, Value>,
}

/// One page of index entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePage {
    /// References in index order.
    pub refs: Vec<DocumentRef>,
    /// True when the source reported entries beyond this page.
    pub has_more: bool,
}
