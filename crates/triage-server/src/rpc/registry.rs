//! Method registry and dispatcher.
//!
//! Each method is registered once with a [`MethodKind`] and a one-line
//! description. [`MethodRegistry::dispatch`] looks the handler up, runs it,
//! and records request, error, and latency metrics. A handler that panics or
//! returns [`RpcError::Internal`] is reported to the caller as an
//! `INTERNAL_ERROR` response and recorded in the activity log.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use async_trait::async_trait;
use futures::FutureExt;
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::context::RpcContext;
use super::errors::RpcError;
use super::types::{RpcRequest, RpcResponse};
use crate::metrics::{RPC_ERRORS_TOTAL, RPC_REQUEST_DURATION_SECONDS, RPC_REQUESTS_TOTAL};

/// A single named method.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// Run the method with the caller's parameters.
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError>;
}

/// What a method does to server state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// Read-only data snapshot.
    Resource,
    /// Mutating or computing action.
    Tool,
    /// Static text template.
    Prompt,
}

impl MethodKind {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::Tool => "tool",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for one registered method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    /// Method name.
    pub name: String,
    /// Resource, tool, or prompt.
    pub kind: MethodKind,
    /// One-line summary.
    pub description: String,
}

struct Registered {
    info: MethodInfo,
    handler: Box<dyn MethodHandler>,
}

/// Name → handler table. Registration order is preserved for the catalog.
#[derive(Default)]
pub struct MethodRegistry {
    methods: Vec<Registered>,
    index: HashMap<String, usize>,
}

impl MethodRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`. A later registration with the same
    /// name replaces the earlier one in place.
    pub fn register(
        &mut self,
        name: &str,
        kind: MethodKind,
        description: &str,
        handler: impl MethodHandler + 'static,
    ) {
        let entry = Registered {
            info: MethodInfo {
                name: name.to_string(),
                kind,
                description: description.to_string(),
            },
            handler: Box::new(handler),
        };
        if let Some(&slot) = self.index.get(name) {
            warn!(method = name, "replacing registered method");
            self.methods[slot] = entry;
        } else {
            let _ = self.index.insert(name.to_string(), self.methods.len());
            self.methods.push(entry);
        }
    }

    /// Whether `name` is registered.
    pub fn has_method(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names of every method of `kind`, in registration order.
    pub fn names_of(&self, kind: MethodKind) -> Vec<&str> {
        self.methods
            .iter()
            .filter(|m| m.info.kind == kind)
            .map(|m| m.info.name.as_str())
            .collect()
    }

    /// Catalog of every registered method, in registration order.
    pub fn catalog(&self) -> Vec<MethodInfo> {
        self.methods.iter().map(|m| m.info.clone()).collect()
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Run one request to completion. Never fails: errors become an error
    /// response carrying the request id.
    pub async fn dispatch(&self, request: RpcRequest, ctx: &RpcContext) -> RpcResponse {
        let RpcRequest { id, method, params } = request;

        let Some(entry) = self.index.get(&method).map(|&slot| &self.methods[slot]) else {
            let err = RpcError::MethodNotFound { method };
            counter!(RPC_ERRORS_TOTAL, "method" => "unknown", "error_type" => err.code())
                .increment(1);
            warn!(error = %err, "rpc dispatch failed");
            return RpcResponse::error(id, &err);
        };

        let label = entry.info.name.clone();
        counter!(RPC_REQUESTS_TOTAL, "method" => label.clone()).increment(1);
        let start = Instant::now();
        let outcome = AssertUnwindSafe(entry.handler.handle(params, ctx))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                Err(RpcError::Internal {
                    message: format!("handler panicked: {}", panic_message(payload.as_ref())),
                })
            });
        let elapsed = start.elapsed();
        histogram!(RPC_REQUEST_DURATION_SECONDS, "method" => label.clone())
            .record(elapsed.as_secs_f64());

        match outcome {
            Ok(result) => {
                debug!(method = %label, elapsed_ms = elapsed.as_secs_f64() * 1e3, "rpc ok");
                RpcResponse::success(id, result)
            }
            Err(err) => {
                counter!(RPC_ERRORS_TOTAL, "method" => label.clone(), "error_type" => err.code())
                    .increment(1);
                warn!(method = %label, code = err.code(), error = %err, "rpc failed");
                if matches!(err, RpcError::Internal { .. }) {
                    ctx.activity().error(format_args!("Failed to {label}: {err}"));
                }
                RpcResponse::error(id, &err)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

impl fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.index.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
