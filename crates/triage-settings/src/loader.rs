//! Settings loading: defaults, file merge, environment overrides.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, SettingsError};
use crate::types::TriageSettings;

/// Default settings file location: `~/.triage/settings.json`.
///
/// Falls back to the current directory when `HOME` is unset.
pub fn settings_path() -> PathBuf {
    let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join(".triage").join("settings.json")
}

/// Load settings from [`settings_path`].
pub fn load_settings() -> Result<TriageSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific file.
///
/// A missing file is not an error: defaults plus environment overrides are
/// returned. An unreadable or malformed file is.
pub fn load_settings_from_path(path: &Path) -> Result<TriageSettings> {
    let defaults = serde_json::to_value(TriageSettings::default())?;

    let merged = match std::fs::read_to_string(path) {
        Ok(raw) => {
            let user: Value = serde_json::from_str(&raw)?;
            debug!(?path, "merging settings file over defaults");
            deep_merge(defaults, user)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(?path, "no settings file, using defaults");
            defaults
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut settings: TriageSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings)?;
    settings.validate();
    Ok(settings)
}

/// Recursively merge `overlay` into `base`.
///
/// Objects merge key by key; any other overlay value (including arrays)
/// replaces the base value. `null` in the overlay leaves the base untouched.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Apply `TRIAGE_*` overrides from the process environment.
pub fn apply_env_overrides(settings: &mut TriageSettings) -> Result<()> {
    apply_env_overrides_with(settings, |key| std::env::var(key).ok())
}

/// Apply `TRIAGE_*` overrides using an arbitrary variable lookup.
///
/// Recognized: `TRIAGE_HOST`, `TRIAGE_PORT`, `TRIAGE_LOG_LEVEL`,
/// `TRIAGE_LOG_JSON`, `TRIAGE_SEED_DEMO_DATA`.
pub fn apply_env_overrides_with(
    settings: &mut TriageSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(host) = lookup("TRIAGE_HOST") {
        settings.server.host = host;
    }
    if let Some(raw) = lookup("TRIAGE_PORT") {
        settings.server.port = raw.trim().parse().map_err(|_| SettingsError::InvalidEnv {
            var: "TRIAGE_PORT",
            value: raw.clone(),
        })?;
    }
    if let Some(level) = lookup("TRIAGE_LOG_LEVEL") {
        settings.logging.level = level;
    }
    if let Some(raw) = lookup("TRIAGE_LOG_JSON") {
        settings.logging.json = parse_bool("TRIAGE_LOG_JSON", &raw)?;
    }
    if let Some(raw) = lookup("TRIAGE_SEED_DEMO_DATA") {
        settings.tickets.seed_demo_data = parse_bool("TRIAGE_SEED_DEMO_DATA", &raw)?;
    }
    Ok(())
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidEnv {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn deep_merge_nested_objects() {
        let base = json!({"server": {"host": "a", "port": 1}, "x": 1});
        let overlay = json!({"server": {"port": 2}});
        let merged = deep_merge(base, overlay);
        assert_eq!(merged, json!({"server": {"host": "a", "port": 2}, "x": 1}));
    }

    #[test]
    fn deep_merge_null_keeps_base() {
        let merged = deep_merge(json!({"a": 1}), json!({"a": null}));
        assert_eq!(merged["a"], 1);
    }

    #[test]
    fn deep_merge_arrays_replace() {
        let merged = deep_merge(json!({"a": [1, 2]}), json!({"a": [3]}));
        assert_eq!(merged["a"], json!([3]));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from_path(&dir.path().join("nope.json")).unwrap();
        assert_eq!(s.activity.capacity, TriageSettings::default().activity.capacity);
    }

    #[test]
    fn file_values_merge_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"activity": {"capacity": 10}, "tickets": {"seedDemoData": false}}"#)
            .unwrap();

        let s = load_settings_from_path(&path).unwrap();
        assert_eq!(s.activity.capacity, 10);
        assert_eq!(s.activity.tail_size, 5);
        assert!(!s.tickets.seed_demo_data);
    }

    #[test]
    fn file_values_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"activity": {"capacity": 2, "tailSize": 9}}"#).unwrap();

        let s = load_settings_from_path(&path).unwrap();
        assert_eq!(s.activity.tail_size, 2);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_matches!(load_settings_from_path(&path), Err(SettingsError::Json(_)));
    }

    #[test]
    fn env_overrides_apply() {
        let mut s = TriageSettings::default();
        apply_env_overrides_with(
            &mut s,
            env(&[
                ("TRIAGE_HOST", "0.0.0.0"),
                ("TRIAGE_PORT", "9999"),
                ("TRIAGE_LOG_LEVEL", "debug"),
                ("TRIAGE_LOG_JSON", "true"),
                ("TRIAGE_SEED_DEMO_DATA", "off"),
            ]),
        )
        .unwrap();
        assert_eq!(s.server.host, "0.0.0.0");
        assert_eq!(s.server.port, 9999);
        assert_eq!(s.logging.level, "debug");
        assert!(s.logging.json);
        assert!(!s.tickets.seed_demo_data);
    }

    #[test]
    fn env_bad_port_rejected() {
        let mut s = TriageSettings::default();
        let err = apply_env_overrides_with(&mut s, env(&[("TRIAGE_PORT", "eighty")])).unwrap_err();
        assert_matches!(err, SettingsError::InvalidEnv { var: "TRIAGE_PORT", .. });
    }

    #[test]
    fn env_bad_bool_rejected() {
        let mut s = TriageSettings::default();
        let err = apply_env_overrides_with(&mut s, env(&[("TRIAGE_LOG_JSON", "maybe")])).unwrap_err();
        assert_matches!(err, SettingsError::InvalidEnv { var: "TRIAGE_LOG_JSON", .. });
    }

    #[test]
    fn settings_path_ends_with_triage_dir() {
        let path = settings_path();
        assert!(path.ends_with(".triage/settings.json"));
    }
}
