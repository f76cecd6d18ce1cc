//! Typed events over a native event queue.
//!
//! The queue stores fixed-size [`RawEvent`] records tagged with a numeric
//! category code. This crate wraps each record shape in a variant type
//! ([`KeyboardEvent`], [`MouseMotionEvent`], ...), gathers them into the
//! [`Event`] enum and exposes queue operations as associated functions on it:
//!
//! ```no_run
//! use evtype::{Event, EventType, MouseMotionEvent, QuitEvent};
//!
//! Event::push(QuitEvent::new()).unwrap();
//! assert!(Event::in_queue(EventType::Quit));
//!
//! let mut event = Event::default();
//! while event.poll() {
//!     if let Some(motion) = event.try_get::<MouseMotionEvent>() {
//!         println!("mouse at {}, {}", motion.x(), motion.y());
//!     }
//! }
//! ```
//!
//! Events are plain values. Copying one copies its whole payload, and no
//! variant refers back into the queue.
//!
//! # Modules
//! - [`raw`]: native record layouts and category codes.
//! - [`variants`]: one typed wrapper per record shape.
//! - [`queue`]: the [`EventQueue`] itself and the process-wide instance.
//! - [`eventbus`]: watchers notified of every accepted event.
//! - [`backends`]: sources drained when the queue is pumped.
//!
//! # Feature flags
//! - **`v2-0-14`** (default): display, locale, controller touchpad and
//!   controller sensor events.
//! - **`hid`**: controller hot-plug through `hidapi`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backends;
pub mod config;
pub mod error;
pub mod event;
pub mod event_type;
pub mod eventbus;
pub mod filtered_listener;
pub mod logger;
pub mod pump;
pub mod queue;
pub mod raw;
pub mod source;
pub mod variants;

pub use config::QueueConfig;
pub use error::{ConfigError, EventError, QueueError};
pub use event::Event;
pub use event_type::EventType;
pub use eventbus::{EventBus, EventWatcher, WatchFilter, WatcherId};
pub use filtered_listener::FilteredWatcher;
pub use logger::Logger;
pub use pump::EventPump;
pub use queue::EventQueue;
pub use raw::RawEvent;
pub use source::EventSource;
pub use variants::*;
