//! Bounded activity trail.
//!
//! Entries are appended at the tail and evicted from the head once the log
//! holds more than `capacity` entries. Each append is mirrored to `tracing`
//! so the process log and the in-memory trail agree.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{info, warn};
use triage_core::constants::{ACTIVITY_TIMESTAMP_FORMAT, DEFAULT_ACTIVITY_CAPACITY};

/// One timestamped activity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Event description.
    pub message: String,
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(ACTIVITY_TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// The most recent entries plus the log size, taken under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTail {
    /// Rendered entries, oldest first.
    pub entries: Vec<String>,
    /// Total entries held by the log at snapshot time.
    pub total: usize,
}

/// Append-only, capacity-bounded event trail.
pub struct ActivityLog {
    entries: Mutex<VecDeque<ActivityEntry>>,
    capacity: usize,
}

impl ActivityLog {
    /// Create a log retaining at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }

    /// Maximum retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record an event.
    pub fn append(&self, message: impl Into<String>) {
        let entry = ActivityEntry {
            timestamp: Utc::now(),
            message: message.into(),
        };
        info!(target: "triage::activity", "{}", entry.message);
        self.push(entry);
    }

    /// Record a failure. The stored message carries an `ERROR: ` prefix.
    pub fn error(&self, message: impl fmt::Display) {
        let entry = ActivityEntry {
            timestamp: Utc::now(),
            message: format!("ERROR: {message}"),
        };
        warn!(target: "triage::activity", "{}", entry.message);
        self.push(entry);
    }

    fn push(&self, entry: ActivityEntry) {
        let mut entries = self.entries.lock();
        entries.push_back(entry);
        while entries.len() > self.capacity {
            let _ = entries.pop_front();
        }
    }

    /// The last `n` entries, most recent last, with the total count.
    pub fn tail(&self, n: usize) -> LogTail {
        let entries = self.entries.lock();
        let skip = entries.len().saturating_sub(n);
        LogTail {
            entries: entries.iter().skip(skip).map(ToString::to_string).collect(),
            total: entries.len(),
        }
    }

    /// Copy of every retained entry, oldest first.
    pub fn snapshot(&self) -> Vec<ActivityEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}

impl fmt::Debug for ActivityLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityLog")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
