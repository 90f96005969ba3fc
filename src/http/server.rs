//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server on the configured address.
///
/// This function blocks until the server shuts down. A listener that cannot
/// be bound (port in use, insufficient privilege) surfaces here as
/// [`ServerError::Bind`]; startup failures are fatal and nothing is retried.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;

    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
