//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators over ports; they don't know about
//! concrete implementations.

mod lazy_collection;
mod project_type_catalog;

pub use lazy_collection::LazyCollection;
pub use project_type_catalog::ProjectTypeCatalog;
