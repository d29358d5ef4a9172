//! Place Catalog HTTP Server Binary
//!
//! Entry point for the place catalog REST API server. It builds the
//! configured repository, wires up the HTTP router, and starts serving.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0, overrides catalog.toml)
//! - `PORT`: Server port (default: 8080, overrides catalog.toml)
//! - `REPOSITORY_TYPE`: Repository backend (default: memory)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use place_catalog::catalog::{CatalogConfig, RepositoryFactory};
use place_catalog::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting place catalog server");

    // Resolve configuration (catalog.toml, then env overrides)
    let config = CatalogConfig::from_default_location();
    let kind = config
        .repository_kind()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let repository =
        RepositoryFactory::create(kind).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    info!("Repository initialized ({:?})", kind);

    // Create application state and router
    let state = AppState::new(repository);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
