//! Serving with a bounded graceful shutdown.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// How a server run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every in-flight request finished before the drain deadline.
    Drained,
    /// The drain deadline passed and open connections were dropped.
    TimedOut,
}

/// Serve `app` until `signal` resolves, then allow in-flight requests up to
/// `drain` to complete.
pub async fn serve_with_drain<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain: Duration,
) -> std::io::Result<ShutdownOutcome>
where
    F: Future<Output = ()>,
{
    let stop = Arc::new(Notify::new());
    let server_stop = stop.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_stop.notified().await })
            .await
    });

    tokio::select! {
        result = &mut server => return join_result(result).map(|()| ShutdownOutcome::Drained),
        () = signal => {}
    }

    stop.notify_one();
    match tokio::time::timeout(drain, &mut server).await {
        Ok(result) => join_result(result).map(|()| ShutdownOutcome::Drained),
        Err(_) => {
            tracing::warn!(?drain, "Shutdown drain timed out, dropping open connections");
            server.abort();
            Ok(ShutdownOutcome::TimedOut)
        }
    }
}

fn join_result(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> std::io::Result<()> {
    result.map_err(std::io::Error::other)?
}
