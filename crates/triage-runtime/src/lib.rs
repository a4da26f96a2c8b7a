//! # triage-runtime
//!
//! Stateful core of the triage desk.
//!
//! - **Activity**: [`ActivityLog`], a bounded FIFO trail of human-readable events
//! - **Knowledge**: [`KnowledgeBase`], an immutable keyword → articles index
//! - **Tickets**: [`TicketStore`], the ticket repository and open-queue projection
//!
//! All operations are synchronous. Shared state sits behind `parking_lot`
//! mutexes so the transport can call in from any number of tasks; the only
//! lock nesting is store → activity log.
//!
//! ## Crate Position
//!
//! Depends on: triage-core.
//! Depended on by: triage-server, triage-agent.

#![deny(unsafe_code)]

pub mod activity;
pub mod knowledge;
pub mod tickets;

pub use activity::{ActivityEntry, ActivityLog, LogTail};
pub use knowledge::KnowledgeBase;
pub use tickets::{HealthSnapshot, MemoryStatus, ServiceStatus, TicketStore};
