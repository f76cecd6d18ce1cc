use crate::raw::{codes, RawCommon};

event_variant! {
    /// Request to quit the application.
    QuitEvent(RawCommon) => Event::Quit, member = quit, default = codes::QUIT
}

event_variant! {
    /// Known event without a payload of its own: application lifecycle,
    /// keymap and clipboard changes, render resets and similar.
    CommonEvent(RawCommon) => Event::Common, member = common, default = codes::APP_LOWMEMORY
}

event_variant! {
    /// Event whose category code is not recognized.
    ///
    /// Only the header (code and timestamp) is available; callers can inspect
    /// [`code`](UnknownEvent::code) and otherwise ignore it.
    UnknownEvent(RawCommon) => Event::Unknown, member = common, default = codes::FIRSTEVENT
}

impl UnknownEvent {
    /// Raw category code.
    pub fn code(&self) -> u32 {
        self.raw.kind
    }
}
