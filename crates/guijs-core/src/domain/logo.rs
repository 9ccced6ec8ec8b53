//! Logo URL derivation.
//!
//! Documents store logos as a path fragment. Consumers only ever see the
//! absolute URL, which is computed on every access so the origin can change
//! between deployments without touching cached records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin that logo paths are served from.
pub const DEFAULT_LOGO_ORIGIN: &str = "https://awesomejs.dev";

/// Base origin prefixed to logo paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoOrigin(String);

impl LogoOrigin {
    /// Create a logo origin from a string such as `https://awesomejs.dev`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    /// The origin as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for a logo path.
    ///
    /// Plain concatenation: the path is expected to carry its own leading `/`.
    pub fn url_for(&self, logo_path: &str) -> String {
        format!("{}{logo_path}", self.0)
    }
}

impl Default for LogoOrigin {
    fn default() -> Self {
        Self::new(DEFAULT_LOGO_ORIGIN)
    }
}

impl fmt::Display for LogoOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_concatenates() {
        let origin = LogoOrigin::new("https://awesomejs.dev");
        assert_eq!(origin.url_for("/logo.png"), "https://awesomejs.dev/logo.png");
    }

    #[test]
    fn test_default_origin() {
        assert_eq!(LogoOrigin::default().as_str(), DEFAULT_LOGO_ORIGIN);
    }

    #[test]
    fn test_custom_origin() {
        let origin = LogoOrigin::new("http://localhost:8080");
        assert_eq!(
            origin.url_for("/img/vue.svg"),
            "http://localhost:8080/img/vue.svg"
        );
    }
}
