mod config;
mod routes;
mod state;

use std::sync::Arc;

use content::{Catalog, CatalogError, diagram};

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("explainer catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let catalog = Arc::new(Catalog::build()?);
    check_diagrams(&catalog);

    let state = state::AppState::new(catalog);
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "explainer listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

/// Render every diagram description once and log the ones that fail.
fn check_diagrams(catalog: &Catalog) {
    for (label, description) in catalog.descriptions() {
        match diagram::render(description) {
            Ok(layout) => tracing::debug!(diagram = %label, nodes = layout.nodes.len(), "diagram rendered"),
            Err(e) => tracing::warn!(diagram = %label, error = %e, "diagram failed to render"),
        }
    }
    tracing::info!(
        evolution = catalog.evolution.registry.len(),
        coevolution = catalog.coevolution.registry.len(),
        "explainer catalog built"
    );
}
