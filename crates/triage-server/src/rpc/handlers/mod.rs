//! Method handlers and parameter helpers.

pub mod catalog;
pub mod knowledge;
pub mod prompts;
pub mod resources;
pub mod tickets;

use serde_json::Value;

use super::errors::RpcError;
use super::registry::{MethodKind, MethodRegistry};

/// `system://health`
pub const HEALTH: &str = "system://health";
/// `system://ticket_queue`
pub const TICKET_QUEUE: &str = "system://ticket_queue";
/// `system://logs`
pub const LOGS: &str = "system://logs";
/// `create_ticket`
pub const CREATE_TICKET: &str = "create_ticket";
/// `update_ticket_status`
pub const UPDATE_TICKET_STATUS: &str = "update_ticket_status";
/// `search_knowledge_base`
pub const SEARCH_KNOWLEDGE_BASE: &str = "search_knowledge_base";
/// `triage_expert`
pub const TRIAGE_EXPERT: &str = "triage_expert";
/// `rpc.catalog`
pub const CATALOG: &str = "rpc.catalog";

/// Registry with every triage method registered.
pub fn build_registry() -> MethodRegistry {
    let mut registry = MethodRegistry::new();

    registry.register(
        HEALTH,
        MethodKind::Resource,
        "Operational health of the triage desk",
        resources::HealthHandler,
    );
    registry.register(
        TICKET_QUEUE,
        MethodKind::Resource,
        "Every ticket that is not closed",
        resources::TicketQueueHandler,
    );
    registry.register(
        LOGS,
        MethodKind::Resource,
        "Most recent activity log entries",
        resources::LogsHandler,
    );
    registry.register(
        CREATE_TICKET,
        MethodKind::Tool,
        "Open a new support ticket",
        tickets::CreateTicketHandler,
    );
    registry.register(
        UPDATE_TICKET_STATUS,
        MethodKind::Tool,
        "Change the status of an existing ticket",
        tickets::UpdateTicketStatusHandler,
    );
    registry.register(
        SEARCH_KNOWLEDGE_BASE,
        MethodKind::Tool,
        "Find help articles by keyword",
        knowledge::SearchKnowledgeBaseHandler,
    );
    registry.register(
        TRIAGE_EXPERT,
        MethodKind::Prompt,
        "Senior support engineer triage instructions",
        prompts::TriageExpertHandler,
    );

    let catalog_handler = catalog::CatalogHandler::from_registry(&registry);
    registry.register(
        CATALOG,
        MethodKind::Resource,
        catalog::CATALOG_DESCRIPTION,
        catalog_handler,
    );

    registry
}

/// Extract a required string parameter.
pub fn require_string_param(params: Option<&Value>, key: &str) -> Result<String, RpcError> {
    params
        .and_then(|p| p.get(key))
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| RpcError::InvalidParams {
            message: format!("Missing required parameter '{key}'"),
        })
}

/// Extract an optional string parameter.
pub fn opt_string(params: Option<&Value>, key: &str) -> Option<String> {
    params
        .and_then(|p| p.get(key))
        .and_then(Value::as_str)
        .map(String::from)
}

/// Extract a required integer parameter. Integral JSON numbers (including
/// whole floats such as `2.0`) and numeric strings are accepted.
pub fn require_i64_param(params: Option<&Value>, key: &str) -> Result<i64, RpcError> {
    let value = params
        .and_then(|p| p.get(key))
        .ok_or_else(|| RpcError::InvalidParams {
            message: format!("Missing required parameter '{key}'"),
        })?;
    value
        .as_i64()
        .or_else(|| value.as_f64().and_then(whole_f64_to_i64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| RpcError::InvalidParams {
            message: format!("Parameter '{key}' must be an integer"),
        })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn whole_f64_to_i64(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}
