use crate::error::EventError;
use crate::event_type::EventType;
use crate::raw::{codes, RawUser};

event_variant! {
    /// Application-defined event.
    ///
    /// The category code is any value in the user range; reserve codes with
    /// [`EventQueue::register_user_events`](crate::EventQueue::register_user_events).
    /// `data1`/`data2` are opaque words carried through the queue untouched.
    UserEvent(RawUser) => Event::User, member = user, default = codes::USEREVENT
}

impl UserEvent {
    /// User event tagged with a specific user code.
    ///
    /// Fails for codes outside `USEREVENT..=LASTEVENT`.
    pub fn with_type(code: u32) -> Result<Self, EventError> {
        let mut event = Self::new();
        event.set_event_type(EventType::from_raw(code))?;
        Ok(event)
    }

    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

    /// Application-defined sub-code.
    pub fn code(&self) -> i32 {
        self.raw.code
    }

    pub fn set_code(&mut self, code: i32) {
        self.raw.code = code;
    }

    pub fn data1(&self) -> usize {
        self.raw.data1
    }

    pub fn set_data1(&mut self, data: usize) {
        self.raw.data1 = data;
    }

    pub fn data2(&self) -> usize {
        self.raw.data2
    }

    pub fn set_data2(&mut self, data: usize) {
        self.raw.data2 = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    #[test]
    fn fields() {
        let mut event = UserEvent::with_type(0x8004).unwrap();
        event.set_window_id(2);
        event.set_code(-5);
        event.set_data1(0xdead);
        event.set_data2(usize::MAX);

        assert_eq!(event.event_type(), EventType::User(0x8004));
        assert_eq!(event.window_id(), 2);
        assert_eq!(event.code(), -5);
        assert_eq!(event.data1(), 0xdead);
        assert_eq!(event.data2(), usize::MAX);
    }

    #[test]
    fn codes_outside_user_range_are_rejected() {
        let err = UserEvent::with_type(codes::QUIT).unwrap_err();
        assert_eq!(
            err,
            EventError::ForeignCategory {
                variant: "UserEvent",
                found: EventType::Quit,
            }
        );
        assert!(UserEvent::with_type(codes::USEREVENT - 1).is_err());
        assert!(UserEvent::with_type(codes::LASTEVENT).is_ok());
    }
}
