//! Request and response envelopes for `POST /rpc`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{RpcError, RpcErrorBody};

/// Incoming call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Caller-chosen correlation id, echoed back verbatim.
    #[serde(default)]
    pub id: Value,
    /// Method name, e.g. `create_ticket` or `system://health`.
    pub method: String,
    /// Named parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    /// Build a request with a numeric id.
    pub fn new(id: i64, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            id: Value::from(id),
            method: method.into(),
            params,
        }
    }
}

/// Outgoing reply. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Echo of the request id (`null` if the request could not be parsed).
    pub id: Value,
    /// Whether the method ran.
    pub success: bool,
    /// Handler output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Transport error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorBody>,
}

impl RpcResponse {
    /// Successful reply.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            id,
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Failed reply.
    pub fn error(id: Value, err: &RpcError) -> Self {
        Self {
            id,
            success: false,
            result: None,
            error: Some(err.to_body()),
        }
    }
}
