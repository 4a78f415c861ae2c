//! MCP transport binding
//!
//! Framing, handshake and JSON-RPC parsing are handled by rmcp. This module
//! wires a [`SearchServer`] to a byte stream (stdio in production, an
//! in-memory duplex in tests) and waits for the session to end.

use rmcp::service::{RoleServer, RunningService, ServerInitializeError, ServiceExt};
use rmcp::transport::io::stdio;
use rmcp::transport::IntoTransport;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

use crate::error::{ServerError, ServerResult};

pub mod mcp;

pub use mcp::SearchServer;

/// Complete the MCP handshake on `transport` and return the running session
///
/// A stream that closes before the handshake finishes yields
/// [`ServerError::Disconnected`].
pub async fn serve<T, E, A>(
    server: SearchServer,
    transport: T,
) -> ServerResult<RunningService<RoleServer, SearchServer>>
where
    T: IntoTransport<RoleServer, E, A>,
    E: std::error::Error + Send + Sync + 'static,
{
    server
        .serve(transport)
        .await
        .map_err(|e| match e {
            ServerInitializeError::ConnectionClosed(context) => ServerError::Disconnected(context),
            other => ServerError::transport(format!("MCP server error: {other}")),
        })
}

/// Serve on stdin/stdout until the client disconnects or a signal arrives
pub async fn run_stdio(server: SearchServer) -> ServerResult<()> {
    info!("Synthetic Web Search MCP Server running on stdio");

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let service = tokio::select! {
        result = serve(server, stdio()) => match result {
            Ok(service) => service,
            Err(e) if e.is_disconnect() => {
                info!("Input closed before initialization, shutting down");
                return Ok(());
            }
            Err(e) => return Err(e),
        },
        received = &mut shutdown => {
            info!("Received {}, shutting down gracefully...", received?);
            return Ok(());
        }
    };

    tokio::select! {
        result = service.waiting() => {
            let reason = result.map_err(|e| ServerError::transport(e.to_string()))?;
            info!(?reason, "MCP session ended");
        }
        received = &mut shutdown => {
            info!("Received {}, shutting down gracefully...", received?);
        }
    }

    Ok(())
}

async fn shutdown_signal() -> ServerResult<&'static str> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => Ok("SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}
