use crate::event::Event;
use crate::source::EventSource;

/// The set of sources drained by [`EventQueue::pump`](crate::EventQueue::pump).
#[derive(Default)]
pub struct EventPump {
    sources: Vec<Box<dyn EventSource>>,
}

impl EventPump {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pump preloaded with every source the enabled backends can find.
    pub fn probe() -> Self {
        let sources = crate::backends::probe_sources();
        log::debug!("discovered {} event source(s)", sources.len());
        Self { sources }
    }

    pub fn add_source<S: EventSource + 'static>(&mut self, source: S) {
        log::debug!("adding event source {} ({})", source.name(), source.id());
        self.sources.push(Box::new(source));
    }

    /// Removes the source with the given id. Returns `false` if none matched.
    pub fn remove_source(&mut self, id: &str) -> bool {
        let before = self.sources.len();
        self.sources.retain(|source| source.id() != id);
        self.sources.len() != before
    }

    pub fn source_ids(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Drains every source, in registration order.
    pub fn poll_all(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        for source in self.sources.iter_mut() {
            events.extend(source.poll());
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualSource;
    use crate::variants::QuitEvent;

    #[test]
    fn polls_sources_in_order() {
        let mut first = VirtualSource::new("virtual:0", "First");
        first.quit();
        let mut second = VirtualSource::new("virtual:1", "Second");
        second.move_mouse(1, 3, 4);

        let mut pump = EventPump::new();
        pump.add_source(first);
        pump.add_source(second);
        assert_eq!(pump.source_ids(), ["virtual:0", "virtual:1"]);

        let events = pump.poll_all();
        assert_eq!(events.len(), 2);
        assert!(events[0].is::<QuitEvent>());
        assert!(pump.poll_all().is_empty());

        assert!(pump.remove_source("virtual:0"));
        assert!(!pump.remove_source("virtual:0"));
        assert_eq!(pump.len(), 1);
    }
}
