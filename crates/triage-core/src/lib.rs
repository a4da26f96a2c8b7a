//! # triage-core
//!
//! Foundation types, errors, validation, and logging setup for the triage desk.
//!
//! This crate provides the shared vocabulary that all other triage crates depend on:
//!
//! - **Tickets**: [`tickets::Ticket`] plus the [`tickets::TicketPriority`] and
//!   [`tickets::TicketStatus`] enums
//! - **Knowledge**: [`knowledge::KnowledgeArticle`]
//! - **Errors**: [`errors::TicketError`] via `thiserror`
//! - **Validation**: [`validation::validate_title`], [`validation::validate_description`]
//! - **Logging**: [`logging::init_subscriber`] for the `tracing` subscriber
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other triage crates.

#![deny(unsafe_code)]

pub mod constants;
pub mod errors;
pub mod knowledge;
pub mod logging;
pub mod tickets;
pub mod validation;

pub use errors::TicketError;
pub use knowledge::KnowledgeArticle;
pub use tickets::{NewTicket, Ticket, TicketId, TicketPriority, TicketStatus};
