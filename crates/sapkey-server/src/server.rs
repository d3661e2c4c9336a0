//! Binding and running the retrieval endpoint

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::routes;
use sapkey_store::SharedKeyStore;
use std::future::Future;
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Serve until `shutdown` resolves
///
/// # Errors
/// - `ServerError::Bind` if the configured address cannot be bound
pub async fn serve<S>(
    config: &ServerConfig,
    store: SharedKeyStore,
    shutdown: S,
) -> Result<(), ServerError>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr();
    let (bound, server) = warp::serve(routes(store))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%bound, "Server running on port {}", bound.port());
    server.await;
    tracing::info!("Server stopped");
    Ok(())
}

/// A server running on a background task
#[derive(Debug)]
pub struct RunningServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl RunningServer {
    /// Full URL of the retrieval endpoint
    #[must_use]
    pub fn sap_key_url(&self) -> String {
        format!("http://{}/api/sapkey", self.addr)
    }

    /// Stop accepting connections and wait for the task to finish
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            // Receiver gone means the server already stopped.
            let _ = tx.send(());
        }
        if let Err(e) = self.handle.await {
            tracing::error!(error = %e, "server task failed");
        }
    }
}

/// Bind `addr` (port 0 picks a free port) and serve on a spawned task
///
/// # Errors
/// - `ServerError::Bind` if the address cannot be bound
pub fn spawn(addr: SocketAddr, store: SharedKeyStore) -> Result<RunningServer, ServerError> {
    let (tx, rx) = oneshot::channel::<()>();
    let (bound, server) = warp::serve(routes(store))
        .try_bind_with_graceful_shutdown(addr, async move {
            let _ = rx.await;
        })
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%bound, "Server running on port {}", bound.port());
    let handle = tokio::spawn(server);

    Ok(RunningServer {
        addr: bound,
        shutdown: Some(tx),
        handle,
    })
}
