//! Document source port definitions.
//!
//! This module defines the port trait and DTOs the catalog uses to read
//! documents from the hosted document database. The actual implementation
//! lives in `guijs-fauna`.

mod client;
mod error;
mod types;

pub use client::DocumentSourcePort;
pub use error::{SourcePortError, SourcePortResult};
pub use types::{DocumentRef, SourceDocument, SourcePage};
