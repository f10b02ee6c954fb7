use route_server::catalog::CachedCatalog;
use route_server::config::ServerConfig;
use route_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load once up front so a broken catalog is reported at startup
    let catalog = CachedCatalog::from_config(&config.catalog);
    match catalog.nodes().await {
        Ok(nodes) => info!(
            path = %config.catalog.path.display(),
            nodes = nodes.len(),
            "catalog ready"
        ),
        Err(e) => warn!(error = %e, "catalog not loadable yet, requests will retry"),
    }

    let state = AppState::new(catalog, config.planner.clone());
    let app = create_router(state);

    info!(addr = %config.addr, travel = %config.travel_mode, "DePIN route server listening");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/nodes            - List nodes (?network=&status=)");
    info!("  GET  /api/nodes/:id        - Node details");
    info!("  POST /api/routes/optimize  - Plan a route");
    info!("  GET  /api/routes/options   - Preset routes (?lat=&lng=)");

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
