//! The native event queue.
//!
//! [`EventQueue`] is a bounded FIFO of [`RawEvent`] records. Producers (the
//! registered [`EventSource`]s, or application code through
//! [`Event::push`](crate::Event::push)) append at the tail; consumers take
//! from the head. All operations lock internally, so a queue can be shared
//! between threads by reference.
//!
//! A process normally talks to the single instance returned by [`global`].
//! Call [`install`] before first use to give it a non-default
//! [`QueueConfig`]; otherwise it is created with defaults on first access.
//!
//! # Ordering
//!
//! Records come out in the order they were accepted. [`EventQueue::push`]
//! stamps a record with milliseconds since the queue was created unless it
//! already carries a non-zero timestamp.

use crate::backends::virtual_input::VirtualSource;
use crate::config::QueueConfig;
use crate::error::QueueError;
use crate::event::Event;
use crate::event_type::EventType;
use crate::eventbus::{EventBus, EventWatcher, WatchFilter, WatcherId};
use crate::logger::Logger;
use crate::pump::EventPump;
use crate::raw::{codes, RawEvent};
use crate::source::EventSource;
use log::{debug, trace, warn};
use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Instant;

struct QueueState {
    events: VecDeque<RawEvent>,
    capacity: usize,
    disabled: HashSet<u32>,
    next_user_code: u32,
}

pub struct EventQueue {
    state: Mutex<QueueState>,
    watchers: Mutex<EventBus>,
    pump: Mutex<EventPump>,
    epoch: Instant,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn is_type(raw: &RawEvent, ty: Option<EventType>) -> bool {
    ty.map_or(true, |ty| raw.kind() == ty.to_raw())
}

impl EventQueue {
    /// An empty queue with default settings and no sources.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// A queue with the given settings. A capacity of 0 is raised to 1.
    pub fn with_config(config: QueueConfig) -> Self {
        let capacity = config.capacity.max(1);
        if capacity != config.capacity {
            warn!("event queue capacity 0 raised to 1");
        }

        let mut watchers = EventBus::new();
        if config.log_events {
            watchers.add_watcher(Logger::new(), WatchFilter::All, None);
        }

        let disabled = config.ignored.iter().map(|ty| ty.to_raw()).collect();
        debug!(
            "event queue created (capacity {}, {} ignored type(s))",
            capacity,
            config.ignored.len()
        );

        Self {
            state: Mutex::new(QueueState {
                events: VecDeque::new(),
                capacity,
                disabled,
                next_user_code: codes::USEREVENT,
            }),
            watchers: Mutex::new(watchers),
            pump: Mutex::new(EventPump::new()),
            epoch: Instant::now(),
        }
    }

    /// Like [`with_config`](Self::with_config), with every source the enabled
    /// backends can discover already registered.
    pub fn with_probed_sources(config: QueueConfig) -> Self {
        let queue = Self::with_config(config);
        *lock(&queue.pump) = EventPump::probe();
        queue
    }

    fn state(&self) -> MutexGuard<'_, QueueState> {
        lock(&self.state)
    }

    /// Milliseconds since the queue was created. Wraps after ~49 days.
    pub fn ticks(&self) -> u32 {
        self.epoch.elapsed().as_millis() as u32
    }

    /// Removes and returns the oldest record.
    pub fn poll(&self) -> Option<RawEvent> {
        let raw = self.state().events.pop_front();
        if let Some(raw) = &raw {
            trace!("polled {:?}", EventType::from_raw(raw.kind()));
        }
        raw
    }

    /// Returns a copy of the oldest record without removing it.
    pub fn peek(&self) -> Option<RawEvent> {
        self.state().events.front().copied()
    }

    /// Appends a record at the tail and notifies watchers.
    ///
    /// Fails if the record's type is disabled or the queue is at capacity.
    /// Watchers are notified in the same order records enter the queue, even
    /// with concurrent pushers.
    pub fn push(&self, mut raw: RawEvent) -> Result<(), QueueError> {
        let ty = EventType::from_raw(raw.kind());
        // The bus is locked before the state lock is released, so the next
        // pusher cannot notify ahead of this one.
        let mut watchers = {
            let mut state = self.state();
            if state.disabled.contains(&raw.kind()) {
                trace!("dropped disabled {:?}", ty);
                return Err(QueueError::Ignored(ty));
            }
            if state.events.len() >= state.capacity {
                warn!("event queue full, dropping {:?}", ty);
                return Err(QueueError::Full {
                    capacity: state.capacity,
                });
            }
            if raw.timestamp() == 0 {
                raw.set_timestamp(self.ticks());
            }
            state.events.push_back(raw);
            lock(&self.watchers)
        };
        trace!("pushed {:?}", ty);

        watchers.emit(&Event::from_raw(&raw));
        Ok(())
    }

    /// Removes the oldest pending record of `ty`, or the oldest record of any
    /// type when `ty` is `None`.
    pub fn flush(&self, ty: Option<EventType>) {
        let mut state = self.state();
        if let Some(index) = state.events.iter().position(|raw| is_type(raw, ty)) {
            state.events.remove(index);
        }
    }

    /// Pumps sources, then removes every pending record of `ty` (or every
    /// record when `ty` is `None`).
    pub fn flush_all(&self, ty: Option<EventType>) {
        self.pump();
        let mut state = self.state();
        let before = state.events.len();
        state.events.retain(|raw| !is_type(raw, ty));
        debug!("flushed {} event(s)", before - state.events.len());
    }

    /// Number of pending records of `ty`, or of all records for `None`.
    pub fn len(&self, ty: Option<EventType>) -> usize {
        let state = self.state();
        match ty {
            None => state.events.len(),
            Some(_) => state.events.iter().filter(|raw| is_type(raw, ty)).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state().events.is_empty()
    }

    pub fn contains(&self, ty: EventType) -> bool {
        self.state()
            .events
            .iter()
            .any(|raw| raw.kind() == ty.to_raw())
    }

    pub fn capacity(&self) -> usize {
        self.state().capacity
    }

    /// Drains every registered source into the queue.
    ///
    /// Returns the number of events accepted. Rejected events are logged and
    /// dropped.
    pub fn pump(&self) -> usize {
        let events = lock(&self.pump).poll_all();
        let mut accepted = 0;
        for event in events {
            let Some(raw) = event.to_raw() else {
                continue;
            };
            match self.push(raw) {
                Ok(()) => accepted += 1,
                Err(QueueError::Ignored(_)) => {}
                Err(e) => warn!("pump dropped {:?}: {e}", event.event_type()),
            }
        }
        accepted
    }

    /// Reserves `count` consecutive codes in the user range and returns the
    /// first one.
    pub fn register_user_events(&self, count: u32) -> Result<u32, QueueError> {
        let mut state = self.state();
        let first = state.next_user_code;
        match first.checked_add(count) {
            Some(end) if end <= codes::LASTEVENT => {
                state.next_user_code = end;
                debug!("registered {count} user event(s) at {first:#x}");
                Ok(first)
            }
            _ => Err(QueueError::UserRangeExhausted { requested: count }),
        }
    }

    /// Enables or disables a type. Disabling also drops its pending records.
    pub fn set_enabled(&self, ty: EventType, enabled: bool) {
        let code = ty.to_raw();
        let mut state = self.state();
        if enabled {
            state.disabled.remove(&code);
        } else if state.disabled.insert(code) {
            state.events.retain(|raw| raw.kind() != code);
        }
    }

    pub fn is_enabled(&self, ty: EventType) -> bool {
        !self.state().disabled.contains(&ty.to_raw())
    }

    pub fn add_watcher(
        &self,
        watcher: impl EventWatcher + 'static,
        filter: WatchFilter,
        window: Option<u32>,
    ) -> WatcherId {
        lock(&self.watchers).add_watcher(watcher, filter, window)
    }

    pub fn remove_watcher(&self, id: WatcherId) -> bool {
        lock(&self.watchers).remove_watcher(id)
    }

    pub fn enable_watcher(&self, id: WatcherId) {
        lock(&self.watchers).enable(id);
    }

    pub fn disable_watcher(&self, id: WatcherId) {
        lock(&self.watchers).disable(id);
    }

    pub fn add_source<S: EventSource + 'static>(&self, source: S) {
        lock(&self.pump).add_source(source);
    }

    pub fn remove_source(&self, id: &str) -> bool {
        lock(&self.pump).remove_source(id)
    }

    /// Registers a fresh [`VirtualSource`] under `id`, pre-filled by `fill`.
    pub fn add_virtual_source(&self, id: &str, fill: impl FnOnce(&mut VirtualSource)) {
        let mut source = VirtualSource::new(id, id);
        fill(&mut source);
        self.add_source(source);
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("EventQueue")
            .field("pending", &state.events.len())
            .field("capacity", &state.capacity)
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<EventQueue> = OnceLock::new();

/// The process-wide queue, created with defaults on first use.
pub fn global() -> &'static EventQueue {
    GLOBAL.get_or_init(|| EventQueue::with_probed_sources(QueueConfig::default()))
}

/// Creates the process-wide queue from `config`.
///
/// Fails with [`QueueError::AlreadyInstalled`] once [`global`] or `install`
/// has run.
pub fn install(config: QueueConfig) -> Result<&'static EventQueue, QueueError> {
    let mut installed = false;
    let queue = GLOBAL.get_or_init(|| {
        installed = true;
        EventQueue::with_probed_sources(config)
    });
    if installed {
        Ok(queue)
    } else {
        Err(QueueError::AlreadyInstalled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{MouseMotionEvent, QuitEvent, UserEvent};
    use std::sync::Arc;

    fn push(queue: &EventQueue, event: impl Into<Event>) {
        queue.push(event.into().to_raw().unwrap()).unwrap();
    }

    #[test]
    fn fifo_order() {
        let queue = EventQueue::new();
        push(&queue, QuitEvent::new());
        push(&queue, MouseMotionEvent::new());

        assert_eq!(queue.len(None), 2);
        assert_eq!(queue.peek().unwrap().kind(), codes::QUIT);
        assert_eq!(queue.poll().unwrap().kind(), codes::QUIT);
        assert_eq!(queue.poll().unwrap().kind(), codes::MOUSEMOTION);
        assert!(queue.poll().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn push_keeps_explicit_timestamp() {
        let queue = EventQueue::new();
        let mut quit = QuitEvent::new();
        quit.set_timestamp(42);
        push(&queue, quit);
        assert_eq!(queue.poll().unwrap().timestamp(), 42);
    }

    #[test]
    fn capacity_is_enforced() {
        let queue = EventQueue::with_config(QueueConfig {
            capacity: 1,
            ..QueueConfig::default()
        });
        push(&queue, QuitEvent::new());
        let err = queue.push(RawEvent::new(codes::QUIT)).unwrap_err();
        assert_eq!(err, QueueError::Full { capacity: 1 });
        assert_eq!(queue.len(None), 1);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let queue = EventQueue::with_config(QueueConfig {
            capacity: 0,
            ..QueueConfig::default()
        });
        assert_eq!(queue.capacity(), 1);
        push(&queue, QuitEvent::new());
        assert_eq!(
            queue.push(RawEvent::new(codes::QUIT)),
            Err(QueueError::Full { capacity: 1 })
        );
    }

    #[test]
    fn watchers_see_events_in_queue_order() {
        let queue = EventQueue::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        queue.add_watcher(
            move |event: &Event| sink.lock().unwrap().push(*event),
            WatchFilter::All,
            None,
        );

        std::thread::scope(|scope| {
            for thread in 0..4 {
                let queue = &queue;
                scope.spawn(move || {
                    for i in 0..50 {
                        let mut motion = MouseMotionEvent::new();
                        motion.set_x(thread * 1000 + i);
                        motion.set_timestamp(1);
                        push(queue, motion);
                    }
                });
            }
        });

        let mut polled = Vec::new();
        let mut event = Event::default();
        while event.poll_from(&queue) {
            polled.push(event);
        }
        assert_eq!(polled.len(), 200);
        assert_eq!(*seen.lock().unwrap(), polled);
    }

    #[test]
    fn flush_removes_oldest_match_only() {
        let queue = EventQueue::new();
        push(&queue, QuitEvent::new());
        push(&queue, MouseMotionEvent::new());
        push(&queue, QuitEvent::new());

        queue.flush(Some(EventType::Quit));
        assert_eq!(queue.len(Some(EventType::Quit)), 1);
        assert_eq!(queue.peek().unwrap().kind(), codes::MOUSEMOTION);

        queue.flush(None);
        assert_eq!(queue.len(None), 1);
        assert!(queue.contains(EventType::Quit));
    }

    #[test]
    fn flush_all_by_type() {
        let queue = EventQueue::new();
        push(&queue, QuitEvent::new());
        push(&queue, MouseMotionEvent::new());
        push(&queue, QuitEvent::new());

        queue.flush_all(Some(EventType::Quit));
        assert!(!queue.contains(EventType::Quit));
        assert_eq!(queue.len(None), 1);

        queue.flush_all(None);
        assert!(queue.is_empty());
    }

    #[test]
    fn flush_all_pumps_first() {
        let queue = EventQueue::new();
        queue.add_virtual_source("virtual:flush", |source| source.quit());
        queue.flush_all(None);
        assert!(queue.is_empty());
        assert_eq!(queue.pump(), 0);
    }

    #[test]
    fn disabled_types_are_rejected_and_purged() {
        let queue = EventQueue::with_config(QueueConfig {
            ignored: vec![EventType::MouseMotion],
            ..QueueConfig::default()
        });
        assert!(!queue.is_enabled(EventType::MouseMotion));
        let err = queue.push(RawEvent::new(codes::MOUSEMOTION)).unwrap_err();
        assert_eq!(err, QueueError::Ignored(EventType::MouseMotion));

        push(&queue, QuitEvent::new());
        queue.set_enabled(EventType::Quit, false);
        assert!(queue.is_empty());

        queue.set_enabled(EventType::Quit, true);
        push(&queue, QuitEvent::new());
        assert_eq!(queue.len(None), 1);
    }

    #[test]
    fn user_codes_are_reserved_in_blocks() {
        let queue = EventQueue::new();
        let first = queue.register_user_events(3).unwrap();
        assert_eq!(first, codes::USEREVENT);
        assert_eq!(queue.register_user_events(1).unwrap(), codes::USEREVENT + 3);

        let err = queue.register_user_events(u32::MAX).unwrap_err();
        assert_eq!(err, QueueError::UserRangeExhausted { requested: u32::MAX });

        push(&queue, UserEvent::with_type(first + 1).unwrap());
        assert!(queue.contains(EventType::User(first + 1)));
    }

    #[test]
    fn pump_drains_sources() {
        let queue = EventQueue::new();
        queue.add_virtual_source("virtual:pump", |source| {
            source.quit();
            source.move_mouse(1, 5, 6);
        });

        assert_eq!(queue.pump(), 2);
        assert_eq!(queue.len(None), 2);
        assert!(queue.remove_source("virtual:pump"));
    }

    #[test]
    fn watchers_see_accepted_events() {
        let queue = EventQueue::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = queue.add_watcher(
            move |event: &Event| sink.lock().unwrap().push(event.event_type()),
            WatchFilter::All,
            None,
        );

        push(&queue, QuitEvent::new());
        queue.disable_watcher(id);
        push(&queue, QuitEvent::new());
        queue.enable_watcher(id);
        push(&queue, MouseMotionEvent::new());

        assert_eq!(
            *seen.lock().unwrap(),
            [Some(EventType::Quit), Some(EventType::MouseMotion)]
        );
        assert!(queue.remove_watcher(id));
    }
}
