use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use frameforge_frame::FrameRegistry;
use frameforge_store::CoordinationStore;
use serde::Serialize;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::NavigationConfig;
use crate::error::ServeError;
use crate::protocol::respond;

/// Store key holding the bound port while the server is running.
pub const LISTENING_PORT_KEY: &str = "server.port";

/// Store key holding the index of the most recently served frame.
pub const LAST_FRAME_KEY: &str = "frame.last";

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<FrameRegistry>,
    pub store: Arc<CoordinationStore>,
    pub config: Arc<NavigationConfig>,
}

impl AppState {
    pub fn new(
        registry: Arc<FrameRegistry>,
        store: Arc<CoordinationStore>,
        config: NavigationConfig,
    ) -> Self {
        Self {
            registry,
            store,
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    frames: usize,
}

/// Routes: `GET /frame` and `GET /healthz`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/frame", get(frame_handler))
        .route("/healthz", get(health_handler))
        .with_state(state)
}

/// Serve the frame named by the cursor header.
pub async fn frame_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match respond(&state.registry, &state.config, &headers) {
        Ok((nav, response)) => {
            tracing::debug!(
                current = nav.current,
                total = nav.total,
                "serving frame"
            );
            state.store.add(LAST_FRAME_KEY, nav.current as i64);
            response
        }
        Err(err) => {
            tracing::debug!(error = %err, "frame request rejected");
            err.into_response()
        }
    }
}

async fn health_handler(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        frames: state.registry.count(),
    })
}

/// HTTP server for a frame registry.
pub struct FrameServer {
    listener: TcpListener,
    state: AppState,
}

impl FrameServer {
    /// Bind the listen address.
    pub async fn bind(addr: SocketAddr, state: AppState) -> Result<Self, ServeError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;
        Ok(Self { listener, state })
    }

    /// Actual bound address (useful when binding port 0).
    pub fn local_addr(&self) -> Result<SocketAddr, ServeError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` is cancelled.
    ///
    /// The bound port is published under [`LISTENING_PORT_KEY`] for the
    /// lifetime of the server.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), ServeError> {
        let addr = self.local_addr()?;
        let store = Arc::clone(&self.state.store);
        tracing::info!(
            %addr,
            frames = self.state.registry.count(),
            policy = ?self.state.config.policy,
            "frame server listening"
        );
        store.add(LISTENING_PORT_KEY, i64::from(addr.port()));

        let result = axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await;

        store.subtract(LISTENING_PORT_KEY);
        tracing::info!(%addr, "frame server stopped");
        result.map_err(ServeError::from)
    }
}
