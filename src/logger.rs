use crate::event::Event;
use crate::eventbus::EventWatcher;

/// A watcher that logs every event it sees through the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: log::Level,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level(log::Level::Debug)
    }

    pub fn with_level(level: log::Level) -> Self {
        Logger { level }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl EventWatcher for Logger {
    fn on_event(&mut self, event: &Event) {
        log::log!(target: "evtype::event", self.level, "{:?}", event);
    }
}
