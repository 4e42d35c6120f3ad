//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::controller::{Controller, EchoController};
use crate::routes::app_router;
use crate::routing::engine_routes;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration and the default
/// [`EchoController`].
///
/// # Errors
///
/// See [`run_with_controller`].
pub async fn run(config: Config) -> Result<()> {
    run_with_controller(config, Arc::new(EchoController::new())).await
}

/// Runs the HTTP server, dispatching recognized requests to `controller`.
///
/// Compiles the route table, then binds and serves until shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - The route table or mount path is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run_with_controller(config: Config, controller: Arc<dyn Controller>) -> Result<()> {
    let routes = engine_routes().context("Failed to compile engine routes")?;
    let mount = config.mount()?;
    tracing::info!("Compiled {} routes, mounted at {}", routes.len(), mount);

    let state = AppState::new(routes, mount, controller);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
