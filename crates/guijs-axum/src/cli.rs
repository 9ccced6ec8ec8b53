//! Command-line arguments for the `guijs-server` binary.
//!
//! Every flag can also come from the environment (or a `.env` file).

use clap::Parser;
use guijs_core::config::{DEFAULT_INDEX_NAME, DEFAULT_PAGE_SIZE};
use guijs_core::{CatalogConfig, DEFAULT_LOGO_ORIGIN, TruncationPolicy};
use guijs_fauna::{DEFAULT_FAUNA_ENDPOINT, FaunaClientConfig};

use crate::bootstrap::{DEFAULT_PORT, ServerConfig};

/// Serve the guijs project type catalog over HTTP.
#[derive(Debug, Parser)]
#[command(name = "guijs-server", version, about, long_about = None)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "GUIJS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Fauna database secret
    #[arg(long, env = "FAUNA_SECRET", hide_env_values = true)]
    pub fauna_secret: Option<String>,

    /// Fauna query endpoint
    #[arg(long, env = "FAUNA_ENDPOINT", default_value = DEFAULT_FAUNA_ENDPOINT)]
    pub fauna_endpoint: String,

    /// Index listing the project types, in display order
    #[arg(long, env = "GUIJS_INDEX", default_value = DEFAULT_INDEX_NAME)]
    pub index: String,

    /// Origin prepended to stored logo paths
    #[arg(long, env = "GUIJS_LOGO_ORIGIN", default_value = DEFAULT_LOGO_ORIGIN)]
    pub logo_origin: String,

    /// Maximum number of index entries fetched
    #[arg(long, env = "GUIJS_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Refuse to serve a partial catalog when the index exceeds one page
    #[arg(long, env = "GUIJS_FAIL_ON_TRUNCATION")]
    pub fail_on_truncation: bool,

    /// Do not populate the catalog at startup
    #[arg(long, env = "GUIJS_NO_PREFETCH")]
    pub no_prefetch: bool,

    /// Allowed CORS origins (comma separated); all origins when empty
    #[arg(long = "allowed-origin", env = "GUIJS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

impl ServeArgs {
    /// Build the server configuration these arguments describe.
    pub fn into_config(self) -> ServerConfig {
        let truncation = if self.fail_on_truncation {
            TruncationPolicy::Fail
        } else {
            TruncationPolicy::Warn
        };

        let catalog = CatalogConfig::new()
            .with_index_name(self.index)
            .with_page_size(self.page_size)
            .with_truncation(truncation)
            .with_logo_origin(self.logo_origin);

        let fauna = FaunaClientConfig::new()
            .with_endpoint(self.fauna_endpoint)
            .with_optional_secret(self.fauna_secret);

        let mut config = ServerConfig::with_defaults()
            .with_port(self.port)
            .with_catalog(catalog)
            .with_fauna(fauna);

        if self.no_prefetch {
            config = config.without_prefetch();
        }

        let origins: Vec<String> = self
            .allowed_origins
            .into_iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        if !origins.is_empty() {
            config = config.with_allowed_origins(origins);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::CorsConfig;

    fn parse(args: &[&str]) -> ServeArgs {
        ServeArgs::try_parse_from(std::iter::once("guijs-server").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--port",
            "8080",
            "--logo-origin",
            "http://localhost:8080",
            "--page-size",
            "50",
            "--fail-on-truncation",
            "--no-prefetch",
            "--allowed-origin",
            "http://a.test, http://b.test",
        ])
        .into_config();

        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog.page_size, 50);
        assert_eq!(config.catalog.truncation, TruncationPolicy::Fail);
        assert_eq!(config.catalog.logo_origin.as_str(), "http://localhost:8080");
        assert!(!config.prefetch);
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = ServeArgs::try_parse_from(["guijs-server", "--port", "not-a-port"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fauna_settings_are_forwarded() {
        let config = parse(&[
            "--fauna-secret",
            "fnAE-secret",
            "--fauna-endpoint",
            "http://localhost:8443/",
        ])
        .into_config();

        assert!(config.fauna.has_secret());
        let debug = format!("{:?}", config.fauna);
        assert!(debug.contains("localhost:8443"));
        assert!(!debug.contains("fnAE-secret"));
    }
}
