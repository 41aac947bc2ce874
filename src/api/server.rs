//! HTTP server lifecycle: bind, spawn a background task, and return a
//! handle carrying the shutdown channel.
//!
//! Shutting down also cancels any analysis still waiting out its simulated
//! latency, so in-flight requests finish with the generic failure instead of
//! holding the graceful shutdown open.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::api::router::app_router;
use crate::api::types::ApiContext;
use crate::config::ServerConfig;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

/// Metadata for a running server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running server.
pub struct DrugLensServer {
    pub session: ServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    pending: CancellationToken,
    task: JoinHandle<()>,
}

impl DrugLensServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            self.pending.cancel();
            let _ = tx.send(());
            tracing::info!("Server shutdown signal sent");
        }
    }

    pub fn addr(&self) -> &str {
        &self.session.server_addr
    }

    /// Wait for the background task to finish serving.
    pub async fn stopped(self) {
        if let Err(e) = self.task.await {
            tracing::error!("Server task failed: {e}");
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Load reference data per `config` and start serving.
pub async fn start_server(config: &ServerConfig) -> Result<DrugLensServer, String> {
    let ctx = ApiContext::from_config(config).map_err(|e| e.to_string())?;
    start_server_with(ctx, config).await
}

/// Start serving an already-built context. The bind address and static
/// directory still come from `config`.
pub async fn start_server_with(
    ctx: ApiContext,
    config: &ServerConfig,
) -> Result<DrugLensServer, String> {
    // 1. Bind
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.bind_addr()))?;

    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    // 2. Router
    let pending = ctx.latency.token();
    let app = app_router(ctx, config.static_dir.as_deref());

    // 3. Session metadata
    let session = ServerSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    // 4. Shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    // 5. Serve in the background
    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Server received shutdown signal");
        };

        tracing::info!(%addr, "Server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Server error: {e}");
        }

        tracing::info!("Server stopped");
    });

    Ok(DrugLensServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        pending,
        task,
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
