use crate::event::Event;
use crate::eventbus::EventWatcher;

/// Wraps a watcher and forwards only events accepted by a predicate.
pub struct FilteredWatcher {
    predicate: Box<dyn Fn(&Event) -> bool + Send + Sync>,
    inner: Box<dyn EventWatcher>,
}

impl FilteredWatcher {
    pub fn new(
        predicate: impl Fn(&Event) -> bool + Send + Sync + 'static,
        inner: impl EventWatcher + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner: Box::new(inner),
        }
    }
}

impl EventWatcher for FilteredWatcher {
    fn on_event(&mut self, event: &Event) {
        if (self.predicate)(event) {
            self.inner.on_event(event);
        }
    }
}
