//! Knowledge base search tool.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::instrument;

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::handlers::require_string_param;
use crate::rpc::registry::MethodHandler;

/// Keyword lookup over the knowledge base.
pub struct SearchKnowledgeBaseHandler;

#[async_trait]
impl MethodHandler for SearchKnowledgeBaseHandler {
    #[instrument(skip(self, ctx), fields(method = "search_knowledge_base"))]
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let query = require_string_param(params.as_ref(), "query")?;
        let articles = ctx.knowledge.search(&query);

        ctx.activity().append(format!(
            "Knowledge base search: '{query}' -> {} results",
            articles.len()
        ));

        Ok(json!({
            "query": query,
            "results_count": articles.len(),
            "articles": articles,
        }))
    }
}
