//! Prompt templates.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::instrument;

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::handlers::TRIAGE_EXPERT;
use crate::rpc::registry::MethodHandler;

/// System message for a senior support engineer reviewing the queue.
pub const TRIAGE_EXPERT_PROMPT: &str = "\
You are a Senior Support Engineer with 10+ years of experience in enterprise support systems.

Your role is to:
1. Review the current ticket queue (available at system://ticket_queue)
2. Analyze ticket priorities, statuses, and assignments
3. Suggest the next steps for triage and resolution
4. Identify any tickets that need immediate attention or escalation

Please review the ticket queue and provide:
- A summary of the current ticket status
- Recommendations for prioritization
- Suggested assignments or escalations
- Any patterns or trends you notice

Remember to consider:
- High priority tickets should be addressed first
- Unassigned tickets may need routing
- Tickets in progress should be monitored
- Closed tickets indicate successful resolution

Use the available tools (create_ticket, update_ticket_status, search_knowledge_base) to take action as needed.";

/// Returns [`TRIAGE_EXPERT_PROMPT`]. Takes no parameters.
pub struct TriageExpertHandler;

#[async_trait]
impl MethodHandler for TriageExpertHandler {
    #[instrument(skip(self, _params, _ctx), fields(method = "triage_expert"))]
    async fn handle(&self, _params: Option<Value>, _ctx: &RpcContext) -> Result<Value, RpcError> {
        Ok(json!({
            "name": TRIAGE_EXPERT,
            "text": TRIAGE_EXPERT_PROMPT,
        }))
    }
}
