//! Demo tickets inserted at startup.

use chrono::Utc;
use triage_core::{Ticket, TicketPriority, TicketStatus};

use super::store::TicketStore;

struct SeedTicket {
    title: &'static str,
    description: &'static str,
    priority: TicketPriority,
    status: TicketStatus,
    assigned_to: Option<&'static str>,
}

const DEMO_TICKETS: [SeedTicket; 3] = [
    SeedTicket {
        title: "System Outage - Payment Processing Down",
        description: "Users cannot complete payments. Error 500 on checkout endpoint.",
        priority: TicketPriority::High,
        status: TicketStatus::Open,
        assigned_to: Some("SRE Team"),
    },
    SeedTicket {
        title: "Feature Request: Dark Mode",
        description: "Users have requested a dark mode theme for the application.",
        priority: TicketPriority::Low,
        status: TicketStatus::Open,
        assigned_to: None,
    },
    SeedTicket {
        title: "Login Page Loading Slowly",
        description: "Users report 5-10 second load times on the login page.",
        priority: TicketPriority::Medium,
        status: TicketStatus::InProgress,
        assigned_to: Some("App Support"),
    },
];

impl TicketStore {
    /// Insert the demo tickets and record one activity entry.
    ///
    /// Demo tickets bypass [`create`](Self::create) because they carry an
    /// assignee and a non-`OPEN` status. Returns the number inserted.
    pub fn seed_demo(&self) -> usize {
        let mut table = self.table.lock();
        let now = Utc::now();
        for seed in &DEMO_TICKETS {
            let ticket = Ticket {
                id: table.allocate_id(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                priority: seed.priority,
                status: seed.status,
                created_at: now,
                updated_at: now,
                assigned_to: seed.assigned_to.map(str::to_string),
            };
            table.tickets.push(ticket);
        }
        self.activity.append(format!(
            "Database initialized with {} pre-populated tickets",
            DEMO_TICKETS.len()
        ));
        DEMO_TICKETS.len()
    }
}
