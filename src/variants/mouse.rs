use super::ButtonState;
use crate::raw::{codes, RawMouseButton, RawMouseMotion, RawMouseWheel};

/// Mouse buttons, numbered as the native library numbers them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
}

impl MouseButton {
    pub fn from_raw(button: u8) -> Option<Self> {
        match button {
            1 => Some(MouseButton::Left),
            2 => Some(MouseButton::Middle),
            3 => Some(MouseButton::Right),
            4 => Some(MouseButton::X1),
            5 => Some(MouseButton::X2),
            _ => None,
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::X1 => 4,
            MouseButton::X2 => 5,
        }
    }

    /// Bit of this button in a motion event's button mask.
    pub fn mask(self) -> u32 {
        1 << (self.to_raw() - 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseWheelDirection {
    Normal,
    Flipped,
}

event_variant! {
    /// Pointer moved.
    MouseMotionEvent(RawMouseMotion) => Event::MouseMotion, member = motion, default = codes::MOUSEMOTION
}

impl MouseMotionEvent {
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

    /// Mouse instance id.
    pub fn which(&self) -> u32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: u32) {
        self.raw.which = which;
    }

    /// Mask of buttons held during the motion.
    pub fn state(&self) -> u32 {
        self.raw.state
    }

    pub fn set_state(&mut self, state: u32) {
        self.raw.state = state;
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.raw.state & button.mask() != 0
    }

    pub fn x(&self) -> i32 {
        self.raw.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.raw.x = x;
    }

    pub fn y(&self) -> i32 {
        self.raw.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.raw.y = y;
    }

    /// Relative motion along x since the previous motion event.
    pub fn dx(&self) -> i32 {
        self.raw.xrel
    }

    pub fn set_dx(&mut self, dx: i32) {
        self.raw.xrel = dx;
    }

    pub fn dy(&self) -> i32 {
        self.raw.yrel
    }

    pub fn set_dy(&mut self, dy: i32) {
        self.raw.yrel = dy;
    }
}

event_variant! {
    /// Mouse button pressed or released.
    MouseButtonEvent(RawMouseButton) => Event::MouseButton, member = button, default = codes::MOUSEBUTTONDOWN
}

impl MouseButtonEvent {
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

    pub fn which(&self) -> u32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: u32) {
        self.raw.which = which;
    }

    /// `None` for button numbers outside the known set.
    pub fn button(&self) -> Option<MouseButton> {
        MouseButton::from_raw(self.raw.button)
    }

    pub fn set_button(&mut self, button: MouseButton) {
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

    /// 1 for single-click, 2 for double-click, and so on.
    pub fn clicks(&self) -> u8 {
        self.raw.clicks
    }

    pub fn set_clicks(&mut self, clicks: u8) {
        self.raw.clicks = clicks;
    }

    pub fn x(&self) -> i32 {
        self.raw.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.raw.x = x;
    }

    pub fn y(&self) -> i32 {
        self.raw.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.raw.y = y;
    }
}

event_variant! {
    /// Mouse wheel scrolled.
    MouseWheelEvent(RawMouseWheel) => Event::MouseWheel, member = wheel, default = codes::MOUSEWHEEL
}

impl MouseWheelEvent {
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

    pub fn which(&self) -> u32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: u32) {
        self.raw.which = which;
    }

    /// Horizontal scroll; positive to the right.
    pub fn x(&self) -> i32 {
        self.raw.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.raw.x = x;
    }

    /// Vertical scroll; positive away from the user.
    pub fn y(&self) -> i32 {
        self.raw.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.raw.y = y;
    }

    pub fn direction(&self) -> MouseWheelDirection {
        if self.raw.direction == 1 {
            MouseWheelDirection::Flipped
        } else {
            MouseWheelDirection::Normal
        }
    }

    pub fn set_direction(&mut self, direction: MouseWheelDirection) {
        self.raw.direction = match direction {
            MouseWheelDirection::Normal => 0,
            MouseWheelDirection::Flipped => 1,
        };
    }
}
