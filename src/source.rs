use crate::event::Event;

/// Something that produces events when the queue is pumped.
///
/// Sources stand in for the platform layer: [`EventQueue::pump`] drains every
/// registered source and pushes what it returns.
///
/// [`EventQueue::pump`]: crate::EventQueue::pump
pub trait EventSource: Send {
    /// Returns the events produced since the last call.
    fn poll(&mut self) -> Vec<Event>;
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}
