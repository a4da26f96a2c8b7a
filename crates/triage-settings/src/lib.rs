//! # triage-settings
//!
//! Configuration management with layered sources for the triage desk.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`TriageSettings::default()`]
//! 2. **User file**: `~/.triage/settings.json` or `--settings <path>`
//!    (deep-merged over defaults)
//! 3. **Environment variables**: `TRIAGE_*` overrides (highest priority)
//!
//! There is no global instance: the binary loads settings once and hands the
//! resulting value to the components that need it.
//!
//! # Usage
//!
//! ```no_run
//! use triage_settings::load_settings;
//!
//! let settings = load_settings().unwrap_or_default();
//! println!("listening on {}:{}", settings.server.host, settings.server.port);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_env_overrides_with, deep_merge, load_settings,
    load_settings_from_path, settings_path,
};
pub use types::*;
