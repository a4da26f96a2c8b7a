//! Shared state handed to every method handler.

use std::sync::Arc;

use triage_core::constants::DEFAULT_LOG_TAIL;
use triage_runtime::{ActivityLog, KnowledgeBase, TicketStore};

/// Collaborators a handler may call into.
#[derive(Debug, Clone)]
pub struct RpcContext {
    /// Ticket repository. Also owns the activity log.
    pub store: Arc<TicketStore>,
    /// Keyword article index.
    pub knowledge: &'static KnowledgeBase,
    /// Entries returned by `system://logs`.
    pub log_tail: usize,
}

impl RpcContext {
    /// Context over `store` and the builtin knowledge base.
    pub fn new(store: Arc<TicketStore>) -> Self {
        Self {
            store,
            knowledge: KnowledgeBase::builtin(),
            log_tail: DEFAULT_LOG_TAIL,
        }
    }

    /// Override how many activity entries `system://logs` returns.
    #[must_use]
    pub fn with_log_tail(mut self, log_tail: usize) -> Self {
        self.log_tail = log_tail;
        self
    }

    /// The activity log the store writes to.
    pub fn activity(&self) -> &ActivityLog {
        self.store.activity()
    }
}
