//! Listener setup for the HTTP API.

use axum::Router;
use linkpost_error::{ServerError, ServerErrorKind};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `address` and serve `router` until `shutdown` resolves.
///
/// In-flight requests finish before this returns.
///
/// # Errors
///
/// Returns `Bind` if the address cannot be bound and `Serve` if the server
/// stops with an I/O error.
pub async fn serve<F>(address: &str, router: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(format!("{}: {}", address, e))))?;

    let local = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| address.to_string());
    info!(address = %local, "HTTP API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("HTTP API stopped");
    Ok(())
}
