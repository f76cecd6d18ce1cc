//! Error types.

use crate::event_type::EventType;
use thiserror::Error;

/// Failures reported by the event queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("event queue is full ({capacity} pending events)")]
    Full { capacity: usize },

    #[error("events of type {0:?} are disabled")]
    Ignored(EventType),

    #[error("no user event codes left (requested {requested})")]
    UserRangeExhausted { requested: u32 },

    #[error("cannot push an empty event")]
    EmptyEvent,

    #[error("the global event queue is already installed")]
    AlreadyInstalled,
}

/// Failures reported by [`Event`](crate::Event) accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// A typed accessor was called for a variant the event does not hold.
    #[error("event holds {found:?}, not {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: Option<EventType>,
    },

    /// A variant was retagged with a category it does not carry.
    #[error("{variant} cannot carry {found:?} events")]
    ForeignCategory {
        variant: &'static str,
        found: EventType,
    },
}

/// Failures while loading a [`QueueConfig`](crate::QueueConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config extension: {0:?}")]
    UnsupportedFormat(Option<String>),

    #[error("capacity must be at least 1")]
    ZeroCapacity,
}
