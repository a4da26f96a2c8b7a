//! Shared limits and defaults.

/// Maximum ticket title length, in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum ticket description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Default number of entries retained by the activity log.
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 50;

/// Default number of entries returned by the `system://logs` resource.
pub const DEFAULT_LOG_TAIL: usize = 5;

/// Lower bound of the synthetic load percentage reported by health checks.
pub const DEFAULT_LOAD_MIN: u8 = 12;

/// Upper bound (inclusive) of the synthetic load percentage.
pub const DEFAULT_LOAD_MAX: u8 = 45;

/// Timestamp layout used for activity log entries.
pub const ACTIVITY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Service name reported in startup logs.
pub const SERVICE_NAME: &str = "triage";
