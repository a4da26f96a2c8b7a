//! axum HTTP surface.
//!
//! | route | body |
//! |---|---|
//! | `POST /rpc` | [`RpcRequest`] in, [`RpcResponse`] out, always `200` |
//! | `GET /health` | the `system://health` document |
//! | `GET /metrics` | Prometheus text |

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use triage_runtime::HealthSnapshot;
use triage_settings::ServerSettings;

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::registry::MethodRegistry;
use crate::rpc::types::{RpcRequest, RpcResponse};

/// Errors from binding or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested `host:port`.
        addr: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// State shared by every route.
#[derive(Clone)]
pub struct AppState {
    /// Method table.
    pub registry: Arc<MethodRegistry>,
    /// Handler collaborators.
    pub ctx: RpcContext,
    /// Prometheus handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// State without a metrics endpoint.
    pub fn new(registry: MethodRegistry, ctx: RpcContext) -> Self {
        Self {
            registry: Arc::new(registry),
            ctx,
            metrics: None,
        }
    }

    /// Serve `GET /metrics` from `handle`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Build the router with tracing, timeout, body-limit, and panic layers.
pub fn router(state: AppState, settings: &ServerSettings) -> Router {
    Router::new()
        .route("/rpc", post(rpc_endpoint))
        .route("/health", get(health_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::new())
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_millis(settings.request_timeout_ms),
                )),
        )
        .with_state(state)
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn run(settings: &ServerSettings, state: AppState) -> Result<(), ServerError> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let local = listener.local_addr()?;
    info!(%local, "triage server listening");
    serve(listener, router(state, settings)).await
}

/// Serve `app` on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("triage server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

async fn rpc_endpoint(
    State(state): State<AppState>,
    body: Result<Json<RpcRequest>, JsonRejection>,
) -> Json<RpcResponse> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = RpcError::InvalidParams {
                message: rejection.body_text(),
            };
            warn!(error = %err, "malformed rpc request");
            return Json(RpcResponse::error(Value::Null, &err));
        }
    };
    Json(state.registry.dispatch(request, &state.ctx).await)
}

async fn health_endpoint(State(state): State<AppState>) -> Json<HealthSnapshot> {
    Json(state.ctx.store.health())
}

async fn metrics_endpoint(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            crate::metrics::render(handle),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed",
        )
            .into_response(),
    }
}
