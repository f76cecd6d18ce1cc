use crate::raw::{codes, RawAudioDevice};

event_variant! {
    /// An audio device was added or removed.
    AudioDeviceEvent(RawAudioDevice) => Event::AudioDevice, member = adevice, default = codes::AUDIODEVICEADDED
}

impl AudioDeviceEvent {
    /// Device index (on add) or instance id (on removal).
    pub fn which(&self) -> u32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: u32) {
        self.raw.which = which;
    }

    /// `true` for recording devices.
    pub fn is_capture(&self) -> bool {
        self.raw.iscapture != 0
    }

    /// `true` for playback devices.
    pub fn is_output(&self) -> bool {
        !self.is_capture()
    }

    pub fn set_capture(&mut self, capture: bool) {
        self.raw.iscapture = u8::from(capture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    #[test]
    fn capture_flag() {
        let mut event = AudioDeviceEvent::new();
        assert!(event.is_output());

        event.set_capture(true);
        event.set_which(3);
        event.set_event_type(EventType::AudioDeviceRemoved).unwrap();

        assert!(event.is_capture());
        assert_eq!(event.which(), 3);
        assert_eq!(event.event_type(), EventType::AudioDeviceRemoved);
    }
}
