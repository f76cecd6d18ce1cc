use super::ButtonState;
use crate::raw::{codes, RawDevice, RawJoyAxis, RawJoyBall, RawJoyButton, RawJoyHat};

/// Position of a joystick hat (POV switch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HatState {
    Centered,
    Up,
    Right,
    Down,
    Left,
    RightUp,
    RightDown,
    LeftUp,
    LeftDown,
}

impl HatState {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(HatState::Centered),
            0x01 => Some(HatState::Up),
            0x02 => Some(HatState::Right),
            0x04 => Some(HatState::Down),
            0x08 => Some(HatState::Left),
            0x03 => Some(HatState::RightUp),
            0x06 => Some(HatState::RightDown),
            0x09 => Some(HatState::LeftUp),
            0x0C => Some(HatState::LeftDown),
            _ => None,
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            HatState::Centered => 0x00,
            HatState::Up => 0x01,
            HatState::Right => 0x02,
            HatState::Down => 0x04,
            HatState::Left => 0x08,
            HatState::RightUp => 0x03,
            HatState::RightDown => 0x06,
            HatState::LeftUp => 0x09,
            HatState::LeftDown => 0x0C,
        }
    }
}

event_variant! {
    /// Joystick axis moved.
    JoyAxisEvent(RawJoyAxis) => Event::JoyAxis, member = jaxis, default = codes::JOYAXISMOTION
}

impl JoyAxisEvent {
    /// Joystick instance id.
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn axis(&self) -> u8 {
        self.raw.axis
    }

    pub fn set_axis(&mut self, axis: u8) {
        self.raw.axis = axis;
    }

    /// Axis value in `[-32768, 32767]`.
    pub fn value(&self) -> i16 {
        self.raw.value
    }

    pub fn set_value(&mut self, value: i16) {
        self.raw.value = value;
    }
}

event_variant! {
    /// Joystick trackball moved.
    JoyBallEvent(RawJoyBall) => Event::JoyBall, member = jball, default = codes::JOYBALLMOTION
}

impl JoyBallEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn ball(&self) -> u8 {
        self.raw.ball
    }

    pub fn set_ball(&mut self, ball: u8) {
        self.raw.ball = ball;
    }

    pub fn dx(&self) -> i16 {
        self.raw.xrel
    }

    pub fn set_dx(&mut self, dx: i16) {
        self.raw.xrel = dx;
    }

    pub fn dy(&self) -> i16 {
        self.raw.yrel
    }

    pub fn set_dy(&mut self, dy: i16) {
        self.raw.yrel = dy;
    }
}

event_variant! {
    /// Joystick hat changed position.
    JoyHatEvent(RawJoyHat) => Event::JoyHat, member = jhat, default = codes::JOYHATMOTION
}

impl JoyHatEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn hat(&self) -> u8 {
        self.raw.hat
    }

    pub fn set_hat(&mut self, hat: u8) {
        self.raw.hat = hat;
    }

    /// `None` when the raw value is not a valid hat position.
    pub fn position(&self) -> Option<HatState> {
        HatState::from_raw(self.raw.value)
    }

    pub fn set_position(&mut self, position: HatState) {
        self.raw.value = position.to_raw();
    }
}

event_variant! {
    /// Joystick button pressed or released.
    JoyButtonEvent(RawJoyButton) => Event::JoyButton, member = jbutton, default = codes::JOYBUTTONDOWN
}

impl JoyButtonEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn button(&self) -> u8 {
        self.raw.button
    }

    pub fn set_button(&mut self, button: u8) {
        self.raw.button = button;
    }

    pub fn state(&self) -> ButtonState {
        ButtonState::from_raw(self.raw.state)
    }

    pub fn set_state(&mut self, state: ButtonState) {
        self.raw.state = state.to_raw();
    }

    pub fn is_pressed(&self) -> bool {
        self.state() == ButtonState::Pressed
    }
}

event_variant! {
    /// Joystick attached or detached.
    ///
    /// `which` is the device index on attach and the instance id on detach.
    JoyDeviceEvent(RawDevice) => Event::JoyDevice, member = jdevice, default = codes::JOYDEVICEADDED
}

impl JoyDeviceEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hat_states() {
        let all = [
            HatState::Centered,
            HatState::Up,
            HatState::Right,
            HatState::Down,
            HatState::Left,
            HatState::RightUp,
            HatState::RightDown,
            HatState::LeftUp,
            HatState::LeftDown,
        ];
        for state in all {
            assert_eq!(HatState::from_raw(state.to_raw()), Some(state));
        }
        // Up + Down cannot happen on a real hat.
        assert_eq!(HatState::from_raw(0x05), None);
    }

    #[test]
    fn hat_event_position() {
        let mut event = JoyHatEvent::new();
        assert_eq!(event.position(), Some(HatState::Centered));
        event.set_position(HatState::LeftDown);
        event.set_hat(1);
        assert_eq!(event.position(), Some(HatState::LeftDown));
        assert_eq!(event.hat(), 1);
    }

    #[test]
    fn axis_and_button() {
        let mut axis = JoyAxisEvent::new();
        axis.set_which(2);
        axis.set_axis(1);
        axis.set_value(i16::MIN);
        assert_eq!((axis.which(), axis.axis(), axis.value()), (2, 1, i16::MIN));

        let mut button = JoyButtonEvent::new();
        button.set_button(11);
        button.set_state(ButtonState::Pressed);
        assert!(button.is_pressed());
        assert_eq!(button.button(), 11);
    }
}
