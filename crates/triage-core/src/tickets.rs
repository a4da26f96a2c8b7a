//! Core ticket types.
//!
//! Field names serialize in `snake_case` and enum values in
//! `SCREAMING_SNAKE_CASE`, which is the JSON shape callers of the
//! `system://ticket_queue` resource and the ticket tools consume.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TicketError;

/// Ticket identifier. Assigned by the store, starting at 1.
pub type TicketId = i64;

// ─────────────────────────────────────────────────────────────────────────────
// Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Ticket priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    /// Can wait.
    Low,
    /// Normal queue order.
    Medium,
    /// Needs attention soon.
    High,
    /// Drop everything.
    Critical,
}

impl TicketPriority {
    /// All priorities, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                TicketError::validation(
                    "priority",
                    format!("invalid value '{s}' (expected one of LOW, MEDIUM, HIGH, CRITICAL)"),
                )
            })
    }
}

/// Ticket status.
///
/// Any status may follow any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Newly filed.
    #[default]
    Open,
    /// Someone is working on it.
    InProgress,
    /// Fix delivered, awaiting confirmation.
    Resolved,
    /// Done. Closed tickets drop out of the open queue.
    Closed,
}

impl TicketStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }

    /// Whether a ticket in this status belongs in the open queue.
    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                TicketError::validation(
                    "status",
                    format!(
                        "invalid value '{s}' (expected one of OPEN, IN_PROGRESS, RESOLVED, CLOSED)"
                    ),
                )
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain types
// ─────────────────────────────────────────────────────────────────────────────

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Store-assigned id.
    pub id: TicketId,
    /// Trimmed title, 1–200 characters.
    pub title: String,
    /// Free-form description, up to 1000 characters.
    pub description: String,
    /// Priority, fixed at creation.
    pub priority: TicketPriority,
    /// Current status.
    pub status: TicketStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Owning person or team.
    pub assigned_to: Option<String>,
}

impl Ticket {
    /// Whether the ticket belongs in the open queue.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

/// Parameters for creating a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    /// Raw title; trimmed during validation.
    pub title: String,
    /// Priority level.
    pub priority: TicketPriority,
    /// Optional description (empty when omitted).
    pub description: String,
}

impl NewTicket {
    /// Ticket with an empty description.
    pub fn new(title: impl Into<String>, priority: TicketPriority) -> Self {
        Self {
            title: title.into(),
            priority,
            description: String::new(),
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn priority_serializes_uppercase() {
        assert_eq!(serde_json::to_value(TicketPriority::Critical).unwrap(), json!("CRITICAL"));
    }

    #[test]
    fn status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_value(TicketStatus::InProgress).unwrap(),
            json!("IN_PROGRESS")
        );
    }

    #[test]
    fn parse_priority_case_insensitive() {
        assert_eq!("high".parse::<TicketPriority>().unwrap(), TicketPriority::High);
        assert_eq!(" LOW ".parse::<TicketPriority>().unwrap(), TicketPriority::Low);
    }

    #[test]
    fn parse_priority_rejects_unknown() {
        let err = "URGENT".parse::<TicketPriority>().unwrap_err();
        assert_matches!(err, TicketError::Validation { field: "priority", .. });
    }

    #[test]
    fn parse_status_round_trips_display() {
        for status in TicketStatus::ALL {
            assert_eq!(status.to_string().parse::<TicketStatus>().unwrap(), status);
        }
    }

    #[test]
    fn parse_status_rejects_unknown() {
        assert_matches!(
            "DONE".parse::<TicketStatus>(),
            Err(TicketError::Validation { field: "status", .. })
        );
    }

    #[test]
    fn only_closed_is_not_open() {
        assert!(TicketStatus::Open.is_open());
        assert!(TicketStatus::InProgress.is_open());
        assert!(TicketStatus::Resolved.is_open());
        assert!(!TicketStatus::Closed.is_open());
    }

    #[test]
    fn default_status_is_open() {
        assert_eq!(TicketStatus::default(), TicketStatus::Open);
    }

    #[test]
    fn ticket_wire_shape() {
        let now = Utc::now();
        let ticket = Ticket {
            id: 7,
            title: "Broken login".into(),
            description: String::new(),
            priority: TicketPriority::Medium,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
            assigned_to: None,
        };
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["priority"], "MEDIUM");
        assert_eq!(value["status"], "OPEN");
        assert!(value["assigned_to"].is_null());
        assert!(value["created_at"].is_string());
        assert_eq!(value["created_at"], value["updated_at"]);
    }
}
