//! Transport-level errors.
//!
//! Domain failures (validation, unknown ticket) are not errors at this layer:
//! handlers turn them into `{"success": false, ...}` results. [`RpcError`]
//! covers what the caller got wrong about the call itself, or a fault the
//! handler could not express as a result.

use serde::{Deserialize, Serialize};

/// Missing or mistyped parameter.
pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
/// No handler registered under the requested name.
pub const METHOD_NOT_FOUND: &str = "METHOD_NOT_FOUND";
/// Unexpected fault inside a handler.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Error returned by a method handler or the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    /// Missing or mistyped parameter.
    #[error("{message}")]
    InvalidParams {
        /// What was wrong.
        message: String,
    },

    /// Unknown method name.
    #[error("Method not found: {method}")]
    MethodNotFound {
        /// Requested name.
        method: String,
    },

    /// Unexpected fault.
    #[error("{message}")]
    Internal {
        /// Fault description.
        message: String,
    },
}

impl RpcError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParams { .. } => INVALID_PARAMS,
            Self::MethodNotFound { .. } => METHOD_NOT_FOUND,
            Self::Internal { .. } => INTERNAL_ERROR,
        }
    }

    /// Wire form carried in a failed [`RpcResponse`](super::types::RpcResponse).
    pub fn to_body(&self) -> RpcErrorBody {
        RpcErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal {
            message: e.to_string(),
        }
    }
}

/// `{code, message}` error document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    /// Stable code, e.g. `INVALID_PARAMS`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        let cases = [
            (
                RpcError::InvalidParams {
                    message: "x".into(),
                },
                INVALID_PARAMS,
            ),
            (
                RpcError::MethodNotFound {
                    method: "nope".into(),
                },
                METHOD_NOT_FOUND,
            ),
            (
                RpcError::Internal {
                    message: "boom".into(),
                },
                INTERNAL_ERROR,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn method_not_found_body() {
        let body = RpcError::MethodNotFound {
            method: "ticket.delete".into(),
        }
        .to_body();
        assert_eq!(body.code, "METHOD_NOT_FOUND");
        assert_eq!(body.message, "Method not found: ticket.delete");
    }
}
