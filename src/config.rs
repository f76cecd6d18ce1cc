//! Queue configuration.
//!
//! [`QueueConfig`] is a small serde-backed profile, loadable from TOML or JSON:
//!
//! ```toml
//! capacity = 1024
//! log_events = true
//! ignored = ["MouseMotion", "FingerMotion", { User = 32769 }]
//! ```
//!
//! Missing keys fall back to [`QueueConfig::default`].

use crate::error::ConfigError;
use crate::event_type::EventType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of pending events the native queue holds.
pub const DEFAULT_CAPACITY: usize = 65_535;

/// Settings applied when an [`EventQueue`](crate::EventQueue) is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Maximum number of pending events; pushes beyond it fail.
    pub capacity: usize,
    /// Event types dropped on push.
    pub ignored: Vec<EventType>,
    /// Register a [`Logger`](crate::logger::Logger) watcher on creation.
    pub log_events: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ignored: Vec::new(),
            log_events: false,
        }
    }
}

impl QueueConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()
    }

    /// Loads a `.toml` or `.json` file, chosen by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(ConfigError::UnsupportedFormat(other.map(str::to_owned))),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_profile() {
        let config = QueueConfig::from_toml_str(
            r#"
            capacity = 16
            ignored = ["MouseMotion", { User = 32769 }]
            "#,
        )
        .unwrap();

        assert_eq!(config.capacity, 16);
        assert_eq!(
            config.ignored,
            vec![EventType::MouseMotion, EventType::User(0x8001)]
        );
        assert!(!config.log_events);
    }

    #[test]
    fn json_profile() {
        let config =
            QueueConfig::from_json_str(r#"{ "log_events": true, "ignored": ["KeyUp"] }"#).unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.log_events);
        assert_eq!(config.ignored, vec![EventType::KeyUp]);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = QueueConfig::from_toml_str("capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn toml_round_trip() {
        let config = QueueConfig {
            capacity: 8,
            ignored: vec![EventType::Window],
            log_events: true,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(QueueConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn unknown_extension() {
        let path = std::env::temp_dir().join("evtype-config-test.yaml");
        std::fs::write(&path, "capacity: 1").unwrap();
        let err = QueueConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(Some(ref ext)) if ext == "yaml"));
        let _ = std::fs::remove_file(&path);
    }
}
