//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::{Context, Result};
use guijs_core::{CatalogConfig, DocumentSourcePort, ProjectTypeCatalog};
use guijs_fauna::{DefaultFaunaClient, FaunaClientConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Default HTTP port for the server.
pub const DEFAULT_PORT: u16 = 4000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Connection settings for the document database.
    pub fauna: FaunaClientConfig,
    /// Catalog settings (index, page size, logo origin).
    pub catalog: CatalogConfig,
    /// Populate the catalog before accepting requests.
    pub prefetch: bool,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            fauna: FaunaClientConfig::default(),
            catalog: CatalogConfig::default(),
            prefetch: true,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create config with default settings.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the document database client configuration.
    #[must_use]
    pub fn with_fauna(mut self, fauna: FaunaClientConfig) -> Self {
        self.fauna = fauna;
        self
    }

    /// Set the catalog configuration.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    /// Skip the startup population; the first query populates instead.
    #[must_use]
    pub const fn without_prefetch(mut self) -> Self {
        self.prefetch = false;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the initialized services handlers need.
#[derive(Debug, Clone)]
pub struct AxumContext {
    /// The project type catalog, shared by every request.
    pub catalog: Arc<ProjectTypeCatalog>,
}

/// Bootstrap the server against the configured document database.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    if !config.fauna.has_secret() {
        warn!("No FAUNA_SECRET configured; the database will reject queries");
    }

    let client = DefaultFaunaClient::new(&config.fauna).context("Failed to build Fauna client")?;
    let source: Arc<dyn DocumentSourcePort> = Arc::new(client);

    bootstrap_with_source(source, config).await
}

/// Bootstrap the server against any document source.
///
/// When `config.prefetch` is set the catalog is populated here, and a
/// failed population aborts startup.
pub async fn bootstrap_with_source(
    source: Arc<dyn DocumentSourcePort>,
    config: &ServerConfig,
) -> Result<AxumContext> {
    let catalog = Arc::new(ProjectTypeCatalog::new(source, config.catalog.clone()));

    if config.prefetch {
        catalog
            .ensure_populated()
            .await
            .context("Failed to populate project type catalog")?;
    } else {
        info!("Catalog prefetch disabled; first query will populate it");
    }

    Ok(AxumContext { catalog })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("guijs server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
