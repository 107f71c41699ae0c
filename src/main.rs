//! talent-gateway server entry point.
//!
//! Loads the pool catalog and starts the Axum HTTP server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use talent_gateway::api;
use talent_gateway::app_state::AppState;
use talent_gateway::config::{GatewayConfig, LogFormat};
use talent_gateway::domain::PoolRegistry;
use talent_gateway::service::SearchService;
use talent_gateway::source::MockCandidateSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting talent-gateway");

    // Build domain layer
    let registry = match &config.pool_registry_path {
        Some(path) => PoolRegistry::load(path)?,
        None => PoolRegistry::builtin(),
    };
    tracing::info!(
        pools = registry.len(),
        source = ?config.pool_registry_path,
        "pool catalog loaded"
    );

    // Build service layer
    let search_service = Arc::new(SearchService::new(
        Arc::new(registry),
        Arc::new(MockCandidateSource::new()),
        config.candidates_per_pool,
    ));

    // Build application
    let app = api::build_app(AppState { search_service });

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
