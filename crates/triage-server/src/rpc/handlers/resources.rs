//! Read-only resources: health, open ticket queue, recent activity.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::instrument;

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::registry::MethodHandler;

/// Service state plus exact ticket counts.
pub struct HealthHandler;

#[async_trait]
impl MethodHandler for HealthHandler {
    #[instrument(skip(self, _params, ctx), fields(method = "system://health"))]
    async fn handle(&self, _params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        Ok(serde_json::to_value(ctx.store.health())?)
    }
}

/// Every ticket whose status is not `CLOSED`.
pub struct TicketQueueHandler;

#[async_trait]
impl MethodHandler for TicketQueueHandler {
    #[instrument(skip(self, _params, ctx), fields(method = "system://ticket_queue"))]
    async fn handle(&self, _params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let tickets = ctx.store.list_open();
        Ok(json!({
            "count": tickets.len(),
            "tickets": tickets,
            "retrieved_at": Utc::now().to_rfc3339(),
        }))
    }
}

/// The newest activity entries.
pub struct LogsHandler;

#[async_trait]
impl MethodHandler for LogsHandler {
    #[instrument(skip(self, _params, ctx), fields(method = "system://logs"))]
    async fn handle(&self, _params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let tail = ctx.activity().tail(ctx.log_tail);
        Ok(json!({
            "showing_last": tail.entries.len(),
            "logs": tail.entries,
            "total_logs": tail.total,
        }))
    }
}
