//! Event watchers.
//!
//! Watchers are notified of every event accepted by an
//! [`EventQueue`](crate::EventQueue), right after it is enqueued. They observe
//! events; they cannot veto or consume them.
//!
//! Watchers run on the pushing thread while the bus is locked, in the order
//! records entered the queue. A watcher must not call back into the queue that
//! notifies it.

use crate::event::Event;
use crate::event_type::EventType;
use std::collections::HashMap;

/// Trait for reacting to events accepted by a queue.
pub trait EventWatcher: Send {
    fn on_event(&mut self, event: &Event);
}

impl<F> EventWatcher for F
where
    F: FnMut(&Event) + Send,
{
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}

/// Determines which events a watcher wants to receive.
#[derive(Debug, Clone)]
pub enum WatchFilter {
    All,
    KeyboardOnly,
    MouseOnly,
    Types(Vec<EventType>),
    Custom(fn(&Event) -> bool),
}

impl WatchFilter {
    pub fn accepts(&self, event: &Event) -> bool {
        let Some(ty) = event.event_type() else {
            return false;
        };
        match self {
            WatchFilter::All => true,
            WatchFilter::KeyboardOnly => ty.is_keyboard(),
            WatchFilter::MouseOnly => ty.is_mouse(),
            WatchFilter::Types(types) => types.contains(&ty),
            WatchFilter::Custom(f) => f(event),
        }
    }
}

/// Identifier returned by [`EventBus::add_watcher`].
pub type WatcherId = u64;

/// Metadata-wrapped watcher with filter and control flags.
struct WatcherEntry {
    watcher: Box<dyn EventWatcher>,
    enabled: bool,
    filter: WatchFilter,
    window: Option<u32>,
}

/// Registry of watchers, dispatched in registration order.
#[derive(Default)]
pub struct EventBus {
    next_id: WatcherId,
    watchers: HashMap<WatcherId, WatcherEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a watcher with a filter and an optional window-id tag.
    ///
    /// A tagged watcher only sees events addressed to that window.
    pub fn add_watcher(
        &mut self,
        watcher: impl EventWatcher + 'static,
        filter: WatchFilter,
        window: Option<u32>,
    ) -> WatcherId {
        let id = self.next_id;
        self.watchers.insert(
            id,
            WatcherEntry {
                watcher: Box::new(watcher),
                enabled: true,
                filter,
                window,
            },
        );
        self.next_id += 1;
        id
    }

    /// Re-enables a previously disabled watcher.
    pub fn enable(&mut self, id: WatcherId) {
        if let Some(entry) = self.watchers.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Mutes a watcher without removing it.
    pub fn disable(&mut self, id: WatcherId) {
        if let Some(entry) = self.watchers.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a watcher. Returns `false` if the id was unknown.
    pub fn remove_watcher(&mut self, id: WatcherId) -> bool {
        self.watchers.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }

    /// Delivers one event to every enabled, matching watcher.
    pub fn emit(&mut self, event: &Event) {
        let mut ids: Vec<WatcherId> = self.watchers.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            let Some(entry) = self.watchers.get_mut(&id) else {
                continue;
            };
            if !entry.enabled {
                continue;
            }

            if let Some(wanted) = entry.window {
                if event.window_id() != Some(wanted) {
                    continue;
                }
            }

            if entry.filter.accepts(event) {
                entry.watcher.on_event(event);
            }
        }
    }

    pub fn emit_all(&mut self, events: &[Event]) {
        for event in events {
            self.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{KeyboardEvent, MouseMotionEvent, QuitEvent};
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<Event>>>, impl EventWatcher + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |event: &Event| sink.lock().unwrap().push(*event))
    }

    #[test]
    fn filters_by_category() {
        let mut bus = EventBus::new();
        let (keys, watcher) = recorder();
        bus.add_watcher(watcher, WatchFilter::KeyboardOnly, None);

        bus.emit_all(&[
            KeyboardEvent::new().into(),
            MouseMotionEvent::new().into(),
            QuitEvent::new().into(),
        ]);

        let keys = keys.lock().unwrap();
        assert_eq!(keys.len(), 1);
        assert!(keys[0].is::<KeyboardEvent>());
    }

    #[test]
    fn window_tag_and_disable() {
        let mut bus = EventBus::new();
        let (seen, watcher) = recorder();
        let id = bus.add_watcher(watcher, WatchFilter::All, Some(2));

        let mut in_window = MouseMotionEvent::new();
        in_window.set_window_id(2);
        let mut elsewhere = MouseMotionEvent::new();
        elsewhere.set_window_id(5);

        bus.emit(&in_window.into());
        bus.emit(&elsewhere.into());
        bus.emit(&QuitEvent::new().into());
        assert_eq!(seen.lock().unwrap().len(), 1);

        bus.disable(id);
        bus.emit(&in_window.into());
        assert_eq!(seen.lock().unwrap().len(), 1);

        bus.enable(id);
        bus.emit(&in_window.into());
        assert_eq!(seen.lock().unwrap().len(), 2);

        assert!(bus.remove_watcher(id));
        assert!(!bus.remove_watcher(id));
        assert!(bus.is_empty());
    }

    #[test]
    fn empty_events_are_not_delivered() {
        let mut bus = EventBus::new();
        let (seen, watcher) = recorder();
        bus.add_watcher(watcher, WatchFilter::Custom(|_| true), None);
        bus.emit(&Event::Empty);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn explicit_type_list() {
        let filter = WatchFilter::Types(vec![EventType::Quit, EventType::KeyUp]);
        assert!(filter.accepts(&QuitEvent::new().into()));
        assert!(!filter.accepts(&KeyboardEvent::new().into()));
    }
}
