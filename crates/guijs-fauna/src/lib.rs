#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// FaunaClient's backend parameter is internal; consumers go through
// DocumentSourcePort.
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod query;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultFaunaClient;

// Configuration
pub use config::{DEFAULT_FAUNA_ENDPOINT, FaunaClientConfig};

// Errors (construction only; queries fail with SourcePortError)
pub use error::{FaunaError, FaunaResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
