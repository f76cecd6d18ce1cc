use crate::raw::{codes, RawDisplay};

/// Sub-kind of a display event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayEventId {
    None,
    Orientation,
    Connected,
    Disconnected,
}

impl DisplayEventId {
    pub fn from_raw(id: u8) -> Option<Self> {
        match id {
            0 => Some(DisplayEventId::None),
            1 => Some(DisplayEventId::Orientation),
            2 => Some(DisplayEventId::Connected),
            3 => Some(DisplayEventId::Disconnected),
            _ => None,
        }
    }

    pub fn to_raw(self) -> u8 {
        self as u8
    }
}

/// Display orientation carried in `data1` of orientation events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Unknown,
    Landscape,
    LandscapeFlipped,
    Portrait,
    PortraitFlipped,
}

impl Orientation {
    fn from_raw(value: i32) -> Self {
        match value {
            1 => Orientation::Landscape,
            2 => Orientation::LandscapeFlipped,
            3 => Orientation::Portrait,
            4 => Orientation::PortraitFlipped,
            _ => Orientation::Unknown,
        }
    }
}

event_variant! {
    /// Display connected, disconnected or reoriented.
    DisplayEvent(RawDisplay) => Event::Display, member = display, default = codes::DISPLAYEVENT
}

impl DisplayEvent {
    /// Display index.
    pub fn index(&self) -> u32 {
        self.raw.display
    }

    pub fn set_index(&mut self, index: u32) {
        self.raw.display = index;
    }

    pub fn event_id(&self) -> Option<DisplayEventId> {
        DisplayEventId::from_raw(self.raw.event)
    }

    pub fn set_event_id(&mut self, id: DisplayEventId) {
        self.raw.event = id.to_raw();
    }

    pub fn data1(&self) -> i32 {
        self.raw.data1
    }

    pub fn set_data1(&mut self, value: i32) {
        self.raw.data1 = value;
    }

    /// Orientation, meaningful for `Orientation` events only.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_raw(self.raw.data1)
    }
}
