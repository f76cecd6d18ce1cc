use crate::raw::{codes, RawWindow};

/// Sub-kind of a window event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEventId {
    None,
    Shown,
    Hidden,
    Exposed,
    Moved,
    Resized,
    SizeChanged,
    Minimized,
    Maximized,
    Restored,
    Enter,
    Leave,
    FocusGained,
    FocusLost,
    Close,
    TakeFocus,
    HitTest,
}

impl WindowEventId {
    const ALL: [WindowEventId; 17] = [
        WindowEventId::None,
        WindowEventId::Shown,
        WindowEventId::Hidden,
        WindowEventId::Exposed,
        WindowEventId::Moved,
        WindowEventId::Resized,
        WindowEventId::SizeChanged,
        WindowEventId::Minimized,
        WindowEventId::Maximized,
        WindowEventId::Restored,
        WindowEventId::Enter,
        WindowEventId::Leave,
        WindowEventId::FocusGained,
        WindowEventId::FocusLost,
        WindowEventId::Close,
        WindowEventId::TakeFocus,
        WindowEventId::HitTest,
    ];

    pub fn from_raw(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub fn to_raw(self) -> u8 {
        self as u8
    }
}

event_variant! {
    /// Window state change.
    ///
    /// The meaning of `data1`/`data2` depends on [`event_id`](WindowEvent::event_id):
    /// position for `Moved`, size for `Resized`/`SizeChanged`, unused otherwise.
    WindowEvent(RawWindow) => Event::Window, member = window, default = codes::WINDOWEVENT
}

impl WindowEvent {
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

    /// `None` for sub-kinds unknown to this crate.
    pub fn event_id(&self) -> Option<WindowEventId> {
        WindowEventId::from_raw(self.raw.event)
    }

    pub fn set_event_id(&mut self, id: WindowEventId) {
        self.raw.event = id.to_raw();
    }

    pub fn data1(&self) -> i32 {
        self.raw.data1
    }

    pub fn set_data1(&mut self, value: i32) {
        self.raw.data1 = value;
    }

    pub fn data2(&self) -> i32 {
        self.raw.data2
    }

    pub fn set_data2(&mut self, value: i32) {
        self.raw.data2 = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_codes_follow_declaration_order() {
        for (code, id) in WindowEventId::ALL.iter().enumerate() {
            assert_eq!(usize::from(id.to_raw()), code);
            assert_eq!(WindowEventId::from_raw(code as u8), Some(*id));
        }
        assert_eq!(WindowEventId::from_raw(17), None);
    }

    #[test]
    fn resize_payload() {
        let mut event = WindowEvent::new();
        event.set_event_id(WindowEventId::Resized);
        event.set_data1(1280);
        event.set_data2(720);

        assert_eq!(event.event_id(), Some(WindowEventId::Resized));
        assert_eq!((event.data1(), event.data2()), (1280, 720));
    }
}
