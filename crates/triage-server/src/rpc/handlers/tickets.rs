//! Ticket tools: create, update status.
//!
//! Domain failures come back as `{"success": false, "error": ...}` results
//! rather than [`RpcError`]s, and are recorded in the activity log. Only a
//! missing or mistyped parameter is a transport error.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::instrument;
use triage_core::{NewTicket, TicketError, TicketPriority, TicketStatus};

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::handlers::{opt_string, require_i64_param, require_string_param};
use crate::rpc::registry::MethodHandler;

fn failure(error: &str) -> Value {
    json!({ "success": false, "error": error })
}

/// Open a new ticket.
pub struct CreateTicketHandler;

#[async_trait]
impl MethodHandler for CreateTicketHandler {
    #[instrument(skip(self, ctx), fields(method = "create_ticket"))]
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let title = require_string_param(params.as_ref(), "title")?;
        let priority = require_string_param(params.as_ref(), "priority")?;
        let description = opt_string(params.as_ref(), "description").unwrap_or_default();

        let priority: TicketPriority = match priority.parse() {
            Ok(p) => p,
            Err(e) => {
                let message = format!("Failed to create ticket: {e}");
                ctx.activity().error(&message);
                return Ok(failure(&message));
            }
        };

        match ctx
            .store
            .create(&NewTicket::new(title, priority).with_description(description))
        {
            Ok(ticket) => Ok(json!({
                "success": true,
                "message": format!("Ticket #{} created successfully", ticket.id),
                "ticket": ticket,
            })),
            // The store has already recorded the failure.
            Err(e) => Ok(failure(&format!("Failed to create ticket: {e}"))),
        }
    }
}

/// Set the status of an existing ticket.
pub struct UpdateTicketStatusHandler;

#[async_trait]
impl MethodHandler for UpdateTicketStatusHandler {
    #[instrument(skip(self, ctx), fields(method = "update_ticket_status"))]
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let ticket_id = require_i64_param(params.as_ref(), "ticket_id")?;
        let status = require_string_param(params.as_ref(), "status")?;

        let status: TicketStatus = match status.parse() {
            Ok(s) => s,
            Err(e) => {
                let message = format!("Failed to update ticket #{ticket_id}: {e}");
                ctx.activity().error(&message);
                return Ok(failure(&message));
            }
        };

        match ctx.store.update_status(ticket_id, status) {
            Ok(ticket) => Ok(json!({
                "success": true,
                "message": format!("Ticket #{ticket_id} status updated to {status}"),
                "ticket": ticket,
            })),
            Err(e) => match &e {
                TicketError::NotFound { available_ids, .. } => Ok(json!({
                    "success": false,
                    "error": e.to_string(),
                    "available_ticket_ids": available_ids,
                })),
                TicketError::Validation { .. } => Ok(failure(&format!(
                    "Failed to update ticket #{ticket_id}: {e}"
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::handlers::test_helpers::{
        last_activity, make_seeded_context, make_test_context,
    };

    #[tokio::test]
    async fn create_success_round_trip() {
        let ctx = make_test_context();
        let result = CreateTicketHandler
            .handle(
                Some(json!({
                    "title": "VPN drops every hour",
                    "priority": "HIGH",
                    "description": "Remote staff disconnected",
                })),
                &ctx,
            )
            .await
            .unwrap();

        assert_eq!(result["success"], true);
        assert_eq!(result["message"], "Ticket #1 created successfully");
        let ticket = &result["ticket"];
        assert_eq!(ticket["id"], 1);
        assert_eq!(ticket["title"], "VPN drops every hour");
        assert_eq!(ticket["description"], "Remote staff disconnected");
        assert_eq!(ticket["priority"], "HIGH");
        assert_eq!(ticket["status"], "OPEN");
        assert_eq!(ticket["created_at"], ticket["updated_at"]);
        assert_eq!(last_activity(&ctx), "Created ticket #1: VPN drops every hour (HIGH)");
    }

    #[tokio::test]
    async fn create_accepts_lowercase_priority() {
        let ctx = make_test_context();
        let result = CreateTicketHandler
            .handle(Some(json!({"title": "t", "priority": "critical"})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["ticket"]["priority"], "CRITICAL");
    }

    #[tokio::test]
    async fn create_empty_title_fails_without_id() {
        let ctx = make_test_context();
        let result = CreateTicketHandler
            .handle(Some(json!({"title": "", "priority": "LOW"})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["success"], false);
        assert!(
            result["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to create ticket: title:")
        );
        assert!(result.get("ticket").is_none());
        assert!(ctx.store.is_empty());
        assert!(last_activity(&ctx).starts_with("ERROR: Failed to create ticket"));

        let next = CreateTicketHandler
            .handle(Some(json!({"title": "real", "priority": "LOW"})), &ctx)
            .await
            .unwrap();
        assert_eq!(next["ticket"]["id"], 1);
    }

    #[tokio::test]
    async fn create_invalid_priority() {
        let ctx = make_test_context();
        let result = CreateTicketHandler
            .handle(Some(json!({"title": "t", "priority": "URGENT"})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["success"], false);
        assert!(result["error"].as_str().unwrap().contains("URGENT"));
        assert!(ctx.store.is_empty());
        assert!(last_activity(&ctx).starts_with("ERROR: Failed to create ticket: priority:"));
    }

    #[tokio::test]
    async fn create_missing_title() {
        let ctx = make_test_context();
        let err = CreateTicketHandler
            .handle(Some(json!({"priority": "LOW"})), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAMS");
    }

    #[tokio::test]
    async fn create_description_too_long() {
        let ctx = make_test_context();
        let result = CreateTicketHandler
            .handle(
                Some(json!({"title": "t", "priority": "LOW", "description": "d".repeat(1001)})),
                &ctx,
            )
            .await
            .unwrap();
        assert_eq!(result["success"], false);
        assert!(result["error"].as_str().unwrap().contains("description"));
    }

    #[tokio::test]
    async fn update_success() {
        let ctx = make_seeded_context();
        let result = UpdateTicketStatusHandler
            .handle(Some(json!({"ticket_id": 2, "status": "RESOLVED"})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["success"], true);
        assert_eq!(result["message"], "Ticket #2 status updated to RESOLVED");
        assert_eq!(result["ticket"]["status"], "RESOLVED");
        assert_eq!(last_activity(&ctx), "Updated ticket #2: OPEN -> RESOLVED");
    }

    #[tokio::test]
    async fn update_unknown_ticket_lists_ids() {
        let ctx = make_seeded_context();
        let result = UpdateTicketStatusHandler
            .handle(Some(json!({"ticket_id": 42, "status": "CLOSED"})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["success"], false);
        assert_eq!(result["error"], "Ticket #42 not found");
        assert_eq!(result["available_ticket_ids"], json!([1, 2, 3]));
        assert_eq!(ctx.store.list_open().len(), 3);
    }

    #[tokio::test]
    async fn update_invalid_status() {
        let ctx = make_seeded_context();
        let result = UpdateTicketStatusHandler
            .handle(Some(json!({"ticket_id": 1, "status": "DONE"})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["success"], false);
        assert!(
            result["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to update ticket #1: status:")
        );
        assert_eq!(ctx.store.get(1).unwrap().status, TicketStatus::Open);
        assert!(last_activity(&ctx).starts_with("ERROR: Failed to update ticket #1"));
    }

    #[tokio::test]
    async fn update_close_then_reopen() {
        let ctx = make_seeded_context();
        for status in ["CLOSED", "OPEN"] {
            let result = UpdateTicketStatusHandler
                .handle(Some(json!({"ticket_id": 1, "status": status})), &ctx)
                .await
                .unwrap();
            assert_eq!(result["success"], true);
        }
        assert_eq!(ctx.store.list_open().len(), 3);
    }

    #[tokio::test]
    async fn update_missing_ticket_id() {
        let ctx = make_test_context();
        let err = UpdateTicketStatusHandler
            .handle(Some(json!({"status": "OPEN"})), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAMS");
    }
}
