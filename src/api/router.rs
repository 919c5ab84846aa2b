//! HTTP API router for the network planner.

use super::{handlers, state::AppState};
use crate::config::{Config, MAX_BODY_BYTES};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Create the API router with all endpoints.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `GET|POST /api/projects`, `GET /api/projects/:id`
/// - `GET|POST /api/projects/:project_id/{devices,connections,vlans,subnets}`
/// - `PUT|DELETE /api/devices/:id`
/// - `GET /api/subnets/:id/facts` - calculator output for a stored subnet
/// - `GET /api/device-kinds` - device kinds with display name and color
/// - `POST /api/tools/subnet-calculator`
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route("/projects/:id", get(handlers::get_project))
        .route(
            "/projects/:project_id/devices",
            get(handlers::list_devices).post(handlers::create_device),
        )
        .route(
            "/projects/:project_id/connections",
            get(handlers::list_connections).post(handlers::create_connection),
        )
        .route(
            "/projects/:project_id/vlans",
            get(handlers::list_vlans).post(handlers::create_vlan),
        )
        .route(
            "/projects/:project_id/subnets",
            get(handlers::list_subnets).post(handlers::create_subnet),
        )
        .route(
            "/devices/:id",
            put(handlers::update_device).delete(handlers::delete_device),
        )
        .route("/subnets/:id/facts", get(handlers::subnet_facts))
        .route("/device-kinds", get(handlers::list_device_kinds))
        .route(
            "/tools/subnet-calculator",
            post(handlers::subnet_calculator),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server and serve until the process is stopped.
pub async fn start_server(state: Arc<AppState>, config: &Config) -> Result<(), std::io::Error> {
    let app = create_router(state);
    let bind_addr = config.bind_addr();

    log::info!("Starting network planner API on {bind_addr}");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown requested");
}
