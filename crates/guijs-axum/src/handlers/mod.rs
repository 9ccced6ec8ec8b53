//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to the project type catalog.

pub mod project_types;
