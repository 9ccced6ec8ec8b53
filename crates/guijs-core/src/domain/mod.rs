//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, vendor wire formats, etc.).
//!
//! # Structure
//!
//! - `project_type` - Project type records and the document transform
//! - `logo` - Logo URL derivation

mod logo;
mod project_type;

pub use logo::{DEFAULT_LOGO_ORIGIN, LogoOrigin};
pub use project_type::{DocumentShapeError, ProjectType};
