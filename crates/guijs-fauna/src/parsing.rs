//! JSON parsing functions for Fauna query results.
//!
//! This module provides sync parsing functions that convert raw result
//! values into core DTOs.

use guijs_core::{DocumentRef, SourceDocument, SourcePage};
use serde_json::{Map, Value};

use crate::error::{FaunaError, FaunaResult};
use crate::models::{OBJ_TAG, QueryErrorBody, REF_TAG};

// ============================================================================
// References
// ============================================================================

/// Parse a tagged document reference.
///
/// ```text
/// {"@ref": {"id": "1", "collection": {"@ref": {"id": "projecttypes", ...}}}}
/// ```
///
/// Returns None for anything that is not a document reference, including
/// collection and index references (which carry no parent collection).
pub fn parse_ref(value: &Value) -> Option<DocumentRef> {
    let inner = value.get(REF_TAG)?;
    let id = inner.get("id")?.as_str()?;
    let collection = inner
        .get("collection")
        .and_then(|c| c.get(REF_TAG))
        .and_then(|c| c.get("id"))
        .and_then(Value::as_str)?;

    Some(DocumentRef::new(collection, id))
}

/// Find the document reference in an index entry.
///
/// Indexes without `values` yield bare references; indexes with values
/// yield tuples such as `["Vue", {"@ref": ...}]`, where the reference is
/// the last element that parses as one.
fn entry_ref(entry: &Value) -> Option<DocumentRef> {
    match entry {
        Value::Array(values) => values.iter().rev().find_map(parse_ref),
        other => parse_ref(other),
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Parse a `Paginate` result into a page of references.
pub fn parse_page(resource: &Value) -> FaunaResult<SourcePage> {
    let entries = resource
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| FaunaError::InvalidResponse {
            message: "page has no 'data' array".to_string(),
        })?;

    let refs = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            entry_ref(entry).ok_or_else(|| FaunaError::InvalidResponse {
                message: format!("page entry {position} carries no document reference"),
            })
        })
        .collect::<FaunaResult<Vec<_>>>()?;

    let has_more = resource.get("after").is_some_and(|after| !after.is_null());

    Ok(SourcePage { refs, has_more })
}

// ============================================================================
// Documents
// ============================================================================

/// Parse a `Get` result into a document.
pub fn parse_document(resource: &Value) -> FaunaResult<SourceDocument> {
    let reference = resource
        .get("ref")
        .and_then(parse_ref)
        .ok_or_else(|| FaunaError::InvalidResponse {
            message: "document has no 'ref'".to_string(),
        })?;

    let ts = resource.get("ts").and_then(Value::as_i64);

    let data = match resource.get("data").map(unescape_object) {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => {
            return Err(FaunaError::InvalidResponse {
                message: format!("document {reference} has a non-object 'data'"),
            });
        }
    };

    Ok(SourceDocument {
        reference,
        ts,
        data,
    })
}

/// Strip the `@obj` escape Fauna wraps around objects whose keys collide
/// with its special forms.
fn unescape_object(value: &Value) -> &Value {
    match value.as_object() {
        Some(map) if map.len() == 1 => map.get(OBJ_TAG).unwrap_or(value),
        _ => value,
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Extract the first query error from an error response body.
pub fn parse_query_error(body: &str) -> Option<(String, String)> {
    let parsed: QueryErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .map(|entry| (entry.code, entry.description))
}
