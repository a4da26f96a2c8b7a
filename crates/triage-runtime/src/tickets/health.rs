//! Health snapshot returned by [`TicketStore::health`](super::TicketStore::health).

use serde::{Deserialize, Serialize};

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    /// Accepting requests.
    Operational,
}

/// Memory state indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryStatus {
    /// Nominal.
    #[serde(rename = "OK")]
    Ok,
}

/// Point-in-time health document.
///
/// `cpu_load_percent` is a synthetic display value with no operational
/// meaning. The ticket counts are exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Service state.
    pub status: ServiceStatus,
    /// Synthetic load percentage.
    pub cpu_load_percent: u8,
    /// Memory indicator.
    pub memory: MemoryStatus,
    /// Tickets whose status is not `CLOSED`.
    pub open_tickets: usize,
    /// All tickets ever created.
    pub total_tickets: usize,
}
