//! In-memory ticket repository.

use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use parking_lot::Mutex;
use rand::Rng;
use tracing::debug;
use triage_core::constants::{DEFAULT_LOAD_MAX, DEFAULT_LOAD_MIN};
use triage_core::validation::validate_new_ticket;
use triage_core::{NewTicket, Ticket, TicketError, TicketId, TicketStatus};

use super::health::{HealthSnapshot, MemoryStatus, ServiceStatus};
use crate::activity::ActivityLog;

/// Tickets plus the next id to hand out. Only ever touched under the store lock.
#[derive(Debug)]
pub(super) struct TicketTable {
    pub(super) tickets: Vec<Ticket>,
    next_id: TicketId,
}

impl TicketTable {
    fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: 1,
        }
    }

    pub(super) fn allocate_id(&mut self) -> TicketId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn ids(&self) -> Vec<TicketId> {
        self.tickets.iter().map(|t| t.id).collect()
    }

    fn open_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_open()).count()
    }
}

/// Thread-safe ticket repository.
pub struct TicketStore {
    pub(super) table: Mutex<TicketTable>,
    pub(super) activity: Arc<ActivityLog>,
    load_range: RangeInclusive<u8>,
}

impl TicketStore {
    /// Create an empty store that records events into `activity`.
    pub fn new(activity: Arc<ActivityLog>) -> Self {
        Self {
            table: Mutex::new(TicketTable::new()),
            activity,
            load_range: DEFAULT_LOAD_MIN..=DEFAULT_LOAD_MAX,
        }
    }

    /// Override the synthetic load range reported by [`health`](Self::health).
    #[must_use]
    pub fn with_load_range(mut self, min: u8, max: u8) -> Self {
        self.load_range = min.min(max)..=max.max(min);
        self
    }

    /// The activity log this store writes to.
    pub fn activity(&self) -> &Arc<ActivityLog> {
        &self.activity
    }

    /// Validate and insert a new `OPEN` ticket.
    ///
    /// On validation failure nothing is inserted and no id is consumed.
    pub fn create(&self, input: &NewTicket) -> Result<Ticket, TicketError> {
        let valid = match validate_new_ticket(input) {
            Ok(valid) => valid,
            Err(e) => {
                self.activity
                    .error(format_args!("Failed to create ticket: {e}"));
                return Err(e);
            }
        };

        let mut table = self.table.lock();
        let now = Utc::now();
        let ticket = Ticket {
            id: table.allocate_id(),
            title: valid.title,
            description: valid.description,
            priority: valid.priority,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
            assigned_to: None,
        };
        table.tickets.push(ticket.clone());
        self.activity.append(format!(
            "Created ticket #{}: {} ({})",
            ticket.id, ticket.title, ticket.priority
        ));
        drop(table);

        counter!("tickets_created_total", "priority" => ticket.priority.as_str()).increment(1);
        Ok(ticket)
    }

    /// Set a ticket's status and refresh `updated_at`.
    ///
    /// Unknown ids fail with [`TicketError::NotFound`] listing every existing id.
    pub fn update_status(
        &self,
        id: TicketId,
        status: TicketStatus,
    ) -> Result<Ticket, TicketError> {
        let mut table = self.table.lock();
        let Some(index) = table.tickets.iter().position(|t| t.id == id) else {
            let err = TicketError::not_found(id, table.ids());
            self.activity.error(&err);
            return Err(err);
        };

        let ticket = &mut table.tickets[index];
        let old_status = ticket.status;
        ticket.status = status;
        ticket.updated_at = Utc::now().max(ticket.created_at);
        let updated = ticket.clone();
        self.activity
            .append(format!("Updated ticket #{id}: {old_status} -> {status}"));
        drop(table);

        counter!("ticket_status_updates_total", "status" => status.as_str()).increment(1);
        Ok(updated)
    }

    /// Look up a ticket by id.
    pub fn get(&self, id: TicketId) -> Option<Ticket> {
        self.table.lock().tickets.iter().find(|t| t.id == id).cloned()
    }

    /// Every ticket whose status is not `CLOSED`, in creation order.
    pub fn list_open(&self) -> Vec<Ticket> {
        self.table
            .lock()
            .tickets
            .iter()
            .filter(|t| t.is_open())
            .cloned()
            .collect()
    }

    /// Ids of every ticket, in creation order.
    pub fn ids(&self) -> Vec<TicketId> {
        self.table.lock().ids()
    }

    /// Total number of tickets.
    pub fn len(&self) -> usize {
        self.table.lock().tickets.len()
    }

    /// Whether the store holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.table.lock().tickets.is_empty()
    }

    /// Counts plus a synthetic load figure.
    pub fn health(&self) -> HealthSnapshot {
        let (open_tickets, total_tickets) = {
            let table = self.table.lock();
            (table.open_count(), table.tickets.len())
        };
        let cpu_load_percent = rand::rng().random_range(self.load_range.clone());
        debug!(open_tickets, total_tickets, cpu_load_percent, "health snapshot");
        HealthSnapshot {
            status: ServiceStatus::Operational,
            cpu_load_percent,
            memory: MemoryStatus::Ok,
            open_tickets,
            total_tickets,
        }
    }
}

impl std::fmt::Debug for TicketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketStore")
            .field("tickets", &self.len())
            .field("load_range", &self.load_range)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use triage_core::TicketPriority;

    fn store() -> TicketStore {
        TicketStore::new(Arc::new(ActivityLog::new(50)))
    }

    fn last_message(store: &TicketStore) -> String {
        store
            .activity()
            .snapshot()
            .last()
            .map(|e| e.message.clone())
            .unwrap_or_default()
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let s = store();
        let a = s.create(&NewTicket::new("a", TicketPriority::Low)).unwrap();
        let b = s.create(&NewTicket::new("b", TicketPriority::High)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn create_round_trip_fields() {
        let s = store();
        let t = s
            .create(&NewTicket::new("  Checkout fails ", TicketPriority::Critical).with_description("500s"))
            .unwrap();
        assert_eq!(t.title, "Checkout fails");
        assert_eq!(t.description, "500s");
        assert_eq!(t.priority, TicketPriority::Critical);
        assert_eq!(t.status, TicketStatus::Open);
        assert_eq!(t.created_at, t.updated_at);
        assert!(t.assigned_to.is_none());
        assert_eq!(s.get(t.id), Some(t));
    }

    #[test]
    fn create_logs_activity() {
        let s = store();
        let _ = s.create(&NewTicket::new("Outage", TicketPriority::High)).unwrap();
        assert_eq!(last_message(&s), "Created ticket #1: Outage (HIGH)");
    }

    #[test]
    fn invalid_create_consumes_no_id() {
        let s = store();
        let err = s.create(&NewTicket::new("", TicketPriority::Low)).unwrap_err();
        assert_matches!(err, TicketError::Validation { field: "title", .. });
        assert!(s.is_empty());
        assert!(last_message(&s).starts_with("ERROR: Failed to create ticket:"));

        let t = s.create(&NewTicket::new("ok", TicketPriority::Low)).unwrap();
        assert_eq!(t.id, 1);
    }

    #[test]
    fn long_description_rejected() {
        let s = store();
        let input = NewTicket::new("t", TicketPriority::Low).with_description("x".repeat(1001));
        assert_matches!(
            s.create(&input),
            Err(TicketError::Validation { field: "description", .. })
        );
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn update_status_changes_status_and_timestamp() {
        let s = store();
        let created = s.create(&NewTicket::new("t", TicketPriority::Low)).unwrap();
        let updated = s.update_status(created.id, TicketStatus::InProgress).unwrap();
        assert_eq!(updated.status, TicketStatus::InProgress);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(last_message(&s), "Updated ticket #1: OPEN -> IN_PROGRESS");
    }

    #[test]
    fn update_status_unknown_id() {
        let s = store();
        let _ = s.create(&NewTicket::new("a", TicketPriority::Low)).unwrap();
        let _ = s.create(&NewTicket::new("b", TicketPriority::Low)).unwrap();
        let before = s.list_open();

        let err = s.update_status(99, TicketStatus::Closed).unwrap_err();
        assert_eq!(err, TicketError::not_found(99, vec![1, 2]));
        assert_eq!(s.list_open(), before);
        assert_eq!(last_message(&s), "ERROR: Ticket #99 not found");
    }

    #[test]
    fn update_status_on_empty_store() {
        let s = store();
        assert_matches!(
            s.update_status(1, TicketStatus::Open),
            Err(TicketError::NotFound { id: 1, available_ids }) if available_ids.is_empty()
        );
    }

    #[test]
    fn any_transition_allowed() {
        let s = store();
        let t = s.create(&NewTicket::new("t", TicketPriority::Low)).unwrap();
        for from in TicketStatus::ALL {
            for to in TicketStatus::ALL {
                let _ = s.update_status(t.id, from).unwrap();
                assert_eq!(s.update_status(t.id, to).unwrap().status, to);
            }
        }
    }

    #[test]
    fn closed_leaves_queue_and_reopen_returns() {
        let s = store();
        let a = s.create(&NewTicket::new("a", TicketPriority::Low)).unwrap();
        let b = s.create(&NewTicket::new("b", TicketPriority::Low)).unwrap();

        let _ = s.update_status(a.id, TicketStatus::Closed).unwrap();
        let open: Vec<TicketId> = s.list_open().iter().map(|t| t.id).collect();
        assert_eq!(open, vec![b.id]);

        let _ = s.update_status(a.id, TicketStatus::Open).unwrap();
        let open: Vec<TicketId> = s.list_open().iter().map(|t| t.id).collect();
        assert_eq!(open, vec![a.id, b.id]);
    }

    #[test]
    fn resolved_stays_in_queue() {
        let s = store();
        let a = s.create(&NewTicket::new("a", TicketPriority::Low)).unwrap();
        let _ = s.update_status(a.id, TicketStatus::Resolved).unwrap();
        assert_eq!(s.list_open().len(), 1);
    }

    #[test]
    fn health_counts() {
        let s = store();
        let a = s.create(&NewTicket::new("a", TicketPriority::Low)).unwrap();
        let _ = s.create(&NewTicket::new("b", TicketPriority::Low)).unwrap();
        let _ = s.update_status(a.id, TicketStatus::Closed).unwrap();

        let h = s.health();
        assert_eq!(h.status, ServiceStatus::Operational);
        assert_eq!(h.memory, MemoryStatus::Ok);
        assert_eq!(h.open_tickets, 1);
        assert_eq!(h.total_tickets, 2);
        assert!((DEFAULT_LOAD_MIN..=DEFAULT_LOAD_MAX).contains(&h.cpu_load_percent));
    }

    #[test]
    fn health_custom_load_range() {
        let s = store().with_load_range(30, 30);
        assert_eq!(s.health().cpu_load_percent, 30);
    }

    #[test]
    fn health_swapped_load_range_is_normalized() {
        let s = store().with_load_range(40, 10);
        let load = s.health().cpu_load_percent;
        assert!((10..=40).contains(&load));
    }

    #[test]
    fn get_missing() {
        assert!(store().get(1).is_none());
    }
}
