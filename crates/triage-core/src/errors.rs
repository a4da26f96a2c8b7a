//! Domain error type for ticket operations.
//!
//! Every fallible core operation returns [`TicketError`]. The transport layer
//! maps variants onto structured failure documents; nothing here panics.

use crate::tickets::TicketId;

/// Errors produced by ticket validation and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    /// Input failed a field constraint. No state was changed.
    #[error("{field}: {message}")]
    Validation {
        /// Offending field name.
        field: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// No ticket with the requested id exists.
    #[error("Ticket #{id} not found")]
    NotFound {
        /// The id that was requested.
        id: TicketId,
        /// Ids of every ticket currently in the store, in creation order.
        available_ids: Vec<TicketId>,
    },
}

impl TicketError {
    /// Build a [`TicketError::Validation`].
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Build a [`TicketError::NotFound`].
    pub fn not_found(id: TicketId, available_ids: Vec<TicketId>) -> Self {
        Self::NotFound { id, available_ids }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}
