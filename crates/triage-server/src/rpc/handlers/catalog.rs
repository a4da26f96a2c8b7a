//! `rpc.catalog`: every registered method with its kind and summary.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::instrument;

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::handlers::CATALOG;
use crate::rpc::registry::{MethodHandler, MethodInfo, MethodKind, MethodRegistry};

/// Summary registered for `rpc.catalog` itself.
pub const CATALOG_DESCRIPTION: &str = "List registered methods";

/// Snapshot of the registry taken when the catalog is registered.
pub struct CatalogHandler {
    methods: Vec<MethodInfo>,
}

impl CatalogHandler {
    /// Capture `registry` plus an entry for the catalog itself.
    pub fn from_registry(registry: &MethodRegistry) -> Self {
        let mut methods = registry.catalog();
        methods.retain(|m| m.name != CATALOG);
        methods.push(MethodInfo {
            name: CATALOG.to_string(),
            kind: MethodKind::Resource,
            description: CATALOG_DESCRIPTION.to_string(),
        });
        Self { methods }
    }
}

#[async_trait]
impl MethodHandler for CatalogHandler {
    #[instrument(skip(self, _params, _ctx), fields(method = "rpc.catalog"))]
    async fn handle(&self, _params: Option<Value>, _ctx: &RpcContext) -> Result<Value, RpcError> {
        Ok(json!({
            "count": self.methods.len(),
            "methods": self.methods,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::rpc::handlers::build_registry;
    use crate::rpc::handlers::test_helpers::make_test_context;
    use crate::rpc::types::RpcRequest;

    #[tokio::test]
    async fn catalog_lists_every_method() {
        let registry = build_registry();
        let ctx = make_test_context();
        let resp = registry
            .dispatch(RpcRequest::new(1, "rpc.catalog", None), &ctx)
            .await;
        let result = resp.result.unwrap();

        assert_eq!(result["count"], registry.len());
        let methods = result["methods"].as_array().unwrap();
        assert_eq!(methods[0]["name"], "system://health");
        assert_eq!(methods[0]["kind"], "resource");
        assert_eq!(methods[3]["name"], "create_ticket");
        assert_eq!(methods[3]["kind"], "tool");
        assert_eq!(methods[6]["kind"], "prompt");
        assert_eq!(methods.last().unwrap()["name"], "rpc.catalog");
    }
}
