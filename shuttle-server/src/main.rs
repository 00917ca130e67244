use shuttle_server::config::ServerConfig;
use shuttle_server::locations::LocationCatalog;
use shuttle_server::network::{NetworkDocument, TransitGraph};
use shuttle_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shuttle_server=debug")),
        )
        .init();

    let config = ServerConfig::from_env();

    // Load the network (fail fast if unusable)
    let document = match &config.network_path {
        Some(path) => {
            info!(path = %path.display(), "loading network document");
            NetworkDocument::from_path(path).expect("Failed to load network document")
        }
        None => {
            info!("using built-in campus network");
            NetworkDocument::campus().expect("Built-in campus network is invalid")
        }
    };
    let network = document.to_network().expect("Invalid network");
    let graph = TransitGraph::new(&network);
    let catalog = LocationCatalog::from_records_or_graph(&document.locations, &graph);

    info!(
        routes = graph.route_count(),
        stops = graph.stop_count(),
        locations = catalog.len(),
        max_iterations = config.planner.max_iterations,
        "network loaded"
    );

    // Build app state
    let state = AppState::new(graph, catalog, config.planner);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.addr, "shuttle trip planner listening");
    info!("  GET  /health      - Health check");
    info!("  GET  /routes      - Routes with ordered stops");
    info!("  GET  /locations   - Named places");
    info!("  POST /trip/plan   - Plan a trip");

    axum::serve(listener, app).await.expect("Server error");
}
