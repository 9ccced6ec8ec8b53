#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{CatalogConfig, TruncationPolicy};
pub use domain::{DEFAULT_LOGO_ORIGIN, DocumentShapeError, LogoOrigin, ProjectType};
pub use error::{CatalogError, CatalogResult};
pub use ports::{
    DocumentRef, DocumentSourcePort, SourceDocument, SourcePage, SourcePortError,
    SourcePortResult,
};
pub use services::{LazyCollection, ProjectTypeCatalog};
