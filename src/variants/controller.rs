use super::ButtonState;
#[cfg(feature = "v2-0-14")]
use super::SensorKind;
use crate::raw::{codes, RawControllerAxis, RawControllerButton, RawDevice};
#[cfg(feature = "v2-0-14")]
use crate::raw::{RawControllerSensor, RawControllerTouchpad};

/// Standard game controller axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

impl ControllerAxis {
    pub fn from_raw(axis: u8) -> Option<Self> {
        match axis {
            0 => Some(ControllerAxis::LeftX),
            1 => Some(ControllerAxis::LeftY),
            2 => Some(ControllerAxis::RightX),
            3 => Some(ControllerAxis::RightY),
            4 => Some(ControllerAxis::TriggerLeft),
            5 => Some(ControllerAxis::TriggerRight),
            _ => None,
        }
    }

    pub fn to_raw(self) -> u8 {
        self as u8
    }
}

/// Standard game controller buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Misc1,
    Paddle1,
    Paddle2,
    Paddle3,
    Paddle4,
    Touchpad,
}

impl ControllerButton {
    const ALL: [ControllerButton; 21] = [
        ControllerButton::A,
        ControllerButton::B,
        ControllerButton::X,
        ControllerButton::Y,
        ControllerButton::Back,
        ControllerButton::Guide,
        ControllerButton::Start,
        ControllerButton::LeftStick,
        ControllerButton::RightStick,
        ControllerButton::LeftShoulder,
        ControllerButton::RightShoulder,
        ControllerButton::DpadUp,
        ControllerButton::DpadDown,
        ControllerButton::DpadLeft,
        ControllerButton::DpadRight,
        ControllerButton::Misc1,
        ControllerButton::Paddle1,
        ControllerButton::Paddle2,
        ControllerButton::Paddle3,
        ControllerButton::Paddle4,
        ControllerButton::Touchpad,
    ];

    pub fn from_raw(button: u8) -> Option<Self> {
        Self::ALL.get(usize::from(button)).copied()
    }

    pub fn to_raw(self) -> u8 {
        self as u8
    }
}

event_variant! {
    /// Controller axis moved.
    ControllerAxisEvent(RawControllerAxis) => Event::ControllerAxis, member = caxis, default = codes::CONTROLLERAXISMOTION
}

impl ControllerAxisEvent {
    /// Joystick instance id of the controller.
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn axis(&self) -> Option<ControllerAxis> {
        ControllerAxis::from_raw(self.raw.axis)
    }

    pub fn set_axis(&mut self, axis: ControllerAxis) {
        self.raw.axis = axis.to_raw();
    }

    pub fn value(&self) -> i16 {
        self.raw.value
    }

    pub fn set_value(&mut self, value: i16) {
        self.raw.value = value;
    }
}

event_variant! {
    /// Controller button pressed or released.
    ControllerButtonEvent(RawControllerButton) => Event::ControllerButton, member = cbutton, default = codes::CONTROLLERBUTTONDOWN
}

impl ControllerButtonEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn button(&self) -> Option<ControllerButton> {
        ControllerButton::from_raw(self.raw.button)
    }

    pub fn set_button(&mut self, button: ControllerButton) {
        self.raw.button = button.to_raw();
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

    pub fn is_released(&self) -> bool {
        self.state() == ButtonState::Released
    }
}

event_variant! {
    /// Controller added, removed or remapped.
    ControllerDeviceEvent(RawDevice) => Event::ControllerDevice, member = cdevice, default = codes::CONTROLLERDEVICEADDED
}

impl ControllerDeviceEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }
}

#[cfg(feature = "v2-0-14")]
event_variant! {
    /// Finger touched, moved on, or left a controller touchpad.
    ControllerTouchpadEvent(RawControllerTouchpad) => Event::ControllerTouchpad, member = ctouchpad, default = codes::CONTROLLERTOUCHPADDOWN
}

#[cfg(feature = "v2-0-14")]
impl ControllerTouchpadEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn touchpad_index(&self) -> i32 {
        self.raw.touchpad
    }

    pub fn set_touchpad_index(&mut self, index: i32) {
        self.raw.touchpad = index;
    }

    pub fn finger_index(&self) -> i32 {
        self.raw.finger
    }

    pub fn set_finger_index(&mut self, index: i32) {
        self.raw.finger = index;
    }

    /// Normalized x in `[0, 1]`; setter clamps.
    pub fn x(&self) -> f32 {
        self.raw.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.raw.x = x.clamp(0.0, 1.0);
    }

    pub fn y(&self) -> f32 {
        self.raw.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.raw.y = y.clamp(0.0, 1.0);
    }

    pub fn pressure(&self) -> f32 {
        self.raw.pressure
    }

    pub fn set_pressure(&mut self, pressure: f32) {
        self.raw.pressure = pressure.clamp(0.0, 1.0);
    }
}

#[cfg(feature = "v2-0-14")]
event_variant! {
    /// Reading from a controller's built-in sensor.
    ControllerSensorEvent(RawControllerSensor) => Event::ControllerSensor, member = csensor, default = codes::CONTROLLERSENSORUPDATE
}

#[cfg(feature = "v2-0-14")]
impl ControllerSensorEvent {
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    pub fn sensor(&self) -> SensorKind {
        SensorKind::from_raw(self.raw.sensor)
    }

    pub fn set_sensor(&mut self, sensor: SensorKind) {
        self.raw.sensor = sensor.to_raw();
    }

    pub fn data(&self) -> [f32; 3] {
        self.raw.data
    }

    pub fn set_data(&mut self, data: [f32; 3]) {
        self.raw.data = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    #[test]
    fn button_codes() {
        for (code, button) in ControllerButton::ALL.iter().enumerate() {
            assert_eq!(usize::from(button.to_raw()), code);
        }
        assert_eq!(ControllerButton::from_raw(21), None);
        assert_eq!(ControllerAxis::from_raw(5), Some(ControllerAxis::TriggerRight));
        assert_eq!(ControllerAxis::from_raw(6), None);
    }

    #[test]
    fn axis_and_button_events() {
        let mut axis = ControllerAxisEvent::new();
        axis.set_axis(ControllerAxis::LeftY);
        axis.set_value(-32768);
        assert_eq!(axis.axis(), Some(ControllerAxis::LeftY));
        assert_eq!(axis.value(), -32768);

        let mut button = ControllerButtonEvent::new();
        button.set_event_type(EventType::ControllerButtonUp).unwrap();
        button.set_button(ControllerButton::Start);
        assert_eq!(button.button(), Some(ControllerButton::Start));
        assert!(button.is_released());
    }

    #[cfg(feature = "v2-0-14")]
    #[test]
    fn touchpad_and_sensor_events() {
        let mut touchpad = ControllerTouchpadEvent::new();
        touchpad.set_x(2.0);
        touchpad.set_finger_index(1);
        assert_eq!(touchpad.x(), 1.0);
        assert_eq!(touchpad.finger_index(), 1);

        let mut sensor = ControllerSensorEvent::new();
        sensor.set_sensor(SensorKind::Gyroscope);
        sensor.set_data([0.0, 1.0, 2.0]);
        assert_eq!(sensor.sensor(), SensorKind::Gyroscope);
        assert_eq!(sensor.data(), [0.0, 1.0, 2.0]);
    }
}
