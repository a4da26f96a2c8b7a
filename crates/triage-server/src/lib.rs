//! # triage-server
//!
//! Named-method transport for the triage desk.
//!
//! - **Registry**: [`rpc::registry::MethodRegistry`] maps method names to handlers
//!   and records per-call metrics
//! - **Handlers**: resources (`system://health`, `system://ticket_queue`,
//!   `system://logs`), tools (`create_ticket`, `update_ticket_status`,
//!   `search_knowledge_base`), the `triage_expert` prompt, and `rpc.catalog`
//! - **HTTP**: [`server::router`] exposes `POST /rpc`, `GET /health`, `GET /metrics`
//! - **Metrics**: Prometheus recorder and metric name constants
//!
//! Handlers only talk to the runtime through [`rpc::context::RpcContext`].
//! They never see axum types.
//!
//! ## Crate Position
//!
//! Depends on: triage-core, triage-settings, triage-runtime.
//! Depended on by: triage-agent.

#![deny(unsafe_code)]

pub mod metrics;
pub mod rpc;
pub mod server;
