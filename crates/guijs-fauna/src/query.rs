//! FQL expression builders.
//!
//! Pure functions producing the FQL v4 JSON wire format, so every query the
//! adapter sends is built the same way.

use guijs_core::DocumentRef;
use serde_json::{Value, json};

/// `Index(name)`
pub fn index(name: &str) -> Value {
    json!({ "index": name })
}

/// `Match(set_ref)`
pub fn match_set(set_ref: Value) -> Value {
    json!({ "match": set_ref })
}

/// `Paginate(set, { size })`
pub fn paginate(set: Value, size: u32) -> Value {
    json!({ "paginate": set, "size": size })
}

/// `Ref(Collection(collection), id)`
pub fn document_ref(reference: &DocumentRef) -> Value {
    json!({ "ref": { "collection": reference.collection }, "id": reference.id })
}

/// `Get(expr)`
pub fn get(expr: Value) -> Value {
    json!({ "get": expr })
}

/// `Paginate(Match(Index(index)), { size })`
pub fn index_page_query(index_name: &str, size: u32) -> Value {
    paginate(match_set(index(index_name)), size)
}

/// `Get(Ref(Collection(collection), id))`
pub fn get_document_query(reference: &DocumentRef) -> Value {
    get(document_ref(reference))
}
