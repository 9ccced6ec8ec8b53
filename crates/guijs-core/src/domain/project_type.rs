//! Project type domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::ports::{DocumentRef, SourceDocument};

/// Document field holding the display name.
const FIELD_NAME: &str = "name";
/// Document field holding the URL-safe identifier.
const FIELD_SLUG: &str = "slug";
/// Document field holding the logo path fragment.
const FIELD_LOGO: &str = "logo";

/// A kind of project the GUI knows how to create and manage (Vue, React, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectType {
    /// Opaque identifier, taken from the document reference.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Logo path relative to the logo origin, exactly as stored.
    pub logo_path: String,
    /// Reference the record was resolved from.
    pub reference: DocumentRef,
}

/// A resolved document did not have the shape of a project type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentShapeError {
    /// A required field is absent or null.
    #[error("document {reference} is missing field '{field}'")]
    MissingField {
        /// Offending document
        reference: DocumentRef,
        /// Field name
        field: &'static str,
    },

    /// A field is present but not a string.
    #[error("document {reference} field '{field}' must be a string, got {found}")]
    NotAString {
        /// Offending document
        reference: DocumentRef,
        /// Field name
        field: &'static str,
        /// JSON type that was found instead
        found: &'static str,
    },
}

impl ProjectType {
    /// Build a project type from a resolved document.
    ///
    /// The id comes from the document reference; `name`, `slug` and `logo`
    /// must be string fields of the body. Other body fields are ignored.
    pub fn from_document(document: &SourceDocument) -> Result<Self, DocumentShapeError> {
        Ok(Self {
            id: document.reference.id.clone(),
            name: string_field(document, FIELD_NAME)?,
            slug: string_field(document, FIELD_SLUG)?,
            logo_path: string_field(document, FIELD_LOGO)?,
            reference: document.reference.clone(),
        })
    }
}

fn string_field(
    document: &SourceDocument,
    field: &'static str,
) -> Result<String, DocumentShapeError> {
    match document.data.get(field) {
        None | Some(Value::Null) => Err(DocumentShapeError::MissingField {
            reference: document.reference.clone(),
            field,
        }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(DocumentShapeError::NotAString {
            reference: document.reference.clone(),
            field,
            found: json_type_name(other),
        }),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
