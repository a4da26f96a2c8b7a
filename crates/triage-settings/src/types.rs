//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]`. Each type implements
//! [`Default`] with production values, and `#[serde(default)]` lets a file
//! specify only the fields it wants to change.

use serde::{Deserialize, Serialize};
use triage_core::constants::{
    DEFAULT_ACTIVITY_CAPACITY, DEFAULT_LOAD_MAX, DEFAULT_LOAD_MIN, DEFAULT_LOG_TAIL,
};

/// Root settings type.
///
/// # JSON Format
///
/// ```json
/// {
///   "server": { "port": 9090 },
///   "activity": { "capacity": 100 }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriageSettings {
    /// HTTP listener.
    pub server: ServerSettings,
    /// Process log output.
    pub logging: LoggingSettings,
    /// Activity trail sizing.
    pub activity: ActivitySettings,
    /// Health resource tuning.
    pub health: HealthSettings,
    /// Ticket store startup behavior.
    pub tickets: TicketSettings,
}

impl TriageSettings {
    /// Correct invalid combinations in place.
    ///
    /// Out-of-range values are corrected with a warning rather than rejected.
    pub fn validate(&mut self) {
        if self.activity.capacity == 0 {
            tracing::warn!("activity capacity 0 is invalid, using {DEFAULT_ACTIVITY_CAPACITY}");
            self.activity.capacity = DEFAULT_ACTIVITY_CAPACITY;
        }
        if self.activity.tail_size > self.activity.capacity {
            tracing::warn!(
                "activity tail_size ({}) > capacity ({}), correcting",
                self.activity.tail_size,
                self.activity.capacity
            );
            self.activity.tail_size = self.activity.capacity;
        }
        if self.health.load_max > 100 {
            tracing::warn!("health load_max ({}) > 100, clamped", self.health.load_max);
            self.health.load_max = 100;
        }
        if self.health.load_min > self.health.load_max {
            tracing::warn!(
                "health load_min ({}) > load_max ({}), correcting",
                self.health.load_min,
                self.health.load_max
            );
            self.health.load_min = self.health.load_max;
        }
    }
}

/// HTTP listener settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Maximum accepted request body, in bytes.
    pub max_body_bytes: usize,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8765,
            max_body_bytes: 64 * 1024,
            request_timeout_ms: 10_000,
        }
    }
}

/// Process log output settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default filter directive (overridden by `RUST_LOG`).
    pub level: String,
    /// Emit JSON lines instead of text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Activity trail settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivitySettings {
    /// Entries retained before the oldest is evicted.
    pub capacity: usize,
    /// Entries returned by the `system://logs` resource.
    pub tail_size: usize,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_ACTIVITY_CAPACITY,
            tail_size: DEFAULT_LOG_TAIL,
        }
    }
}

/// Health resource settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthSettings {
    /// Lowest synthetic load percentage.
    pub load_min: u8,
    /// Highest synthetic load percentage (inclusive).
    pub load_max: u8,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            load_min: DEFAULT_LOAD_MIN,
            load_max: DEFAULT_LOAD_MAX,
        }
    }
}

/// Ticket store startup settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketSettings {
    /// Insert the three demo tickets at startup.
    pub seed_demo_data: bool,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
