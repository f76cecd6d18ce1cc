use super::ButtonState;
use crate::raw::{codes, RawKeyboard};
use std::ops::{BitOr, BitOrAssign};

/// Physical key position, independent of keyboard layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scancode(pub i32);

impl Scancode {
    pub const UNKNOWN: Scancode = Scancode(0);
    pub const A: Scancode = Scancode(4);
    pub const W: Scancode = Scancode(26);
    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const SPACE: Scancode = Scancode(44);
}

/// Virtual key, as mapped by the current keyboard layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Keycode(pub i32);

impl Keycode {
    pub const UNKNOWN: Keycode = Keycode(0);
    pub const RETURN: Keycode = Keycode(b'\r' as i32);
    pub const ESCAPE: Keycode = Keycode(0x1B);
    pub const SPACE: Keycode = Keycode(b' ' as i32);
    pub const A: Keycode = Keycode(b'a' as i32);
    pub const W: Keycode = Keycode(b'w' as i32);
}

/// Key modifier mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyModifiers(pub u16);

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers(0x0000);
    pub const LSHIFT: KeyModifiers = KeyModifiers(0x0001);
    pub const RSHIFT: KeyModifiers = KeyModifiers(0x0002);
    pub const LCTRL: KeyModifiers = KeyModifiers(0x0040);
    pub const RCTRL: KeyModifiers = KeyModifiers(0x0080);
    pub const LALT: KeyModifiers = KeyModifiers(0x0100);
    pub const RALT: KeyModifiers = KeyModifiers(0x0200);
    pub const LGUI: KeyModifiers = KeyModifiers(0x0400);
    pub const RGUI: KeyModifiers = KeyModifiers(0x0800);
    pub const NUM: KeyModifiers = KeyModifiers(0x1000);
    pub const CAPS: KeyModifiers = KeyModifiers(0x2000);
    pub const MODE: KeyModifiers = KeyModifiers(0x4000);

    pub const SHIFT: KeyModifiers = KeyModifiers(0x0001 | 0x0002);
    pub const CTRL: KeyModifiers = KeyModifiers(0x0040 | 0x0080);
    pub const ALT: KeyModifiers = KeyModifiers(0x0100 | 0x0200);
    pub const GUI: KeyModifiers = KeyModifiers(0x0400 | 0x0800);

    /// `true` if every bit of `other` is set.
    pub fn contains(self, other: KeyModifiers) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` if any bit of `other` is set.
    pub fn intersects(self, other: KeyModifiers) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for KeyModifiers {
    type Output = KeyModifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        KeyModifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

event_variant! {
    /// Key pressed or released.
    KeyboardEvent(RawKeyboard) => Event::Keyboard, member = key, default = codes::KEYDOWN
}

impl KeyboardEvent {
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
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

    /// `true` for key repeats generated while the key is held.
    pub fn is_repeated(&self) -> bool {
        self.raw.repeat != 0
    }

    pub fn set_repeated(&mut self, repeated: bool) {
        self.raw.repeat = u8::from(repeated);
    }

    pub fn scancode(&self) -> Scancode {
        Scancode(self.raw.keysym.scancode)
    }

    pub fn set_scancode(&mut self, scancode: Scancode) {
        self.raw.keysym.scancode = scancode.0;
    }

    pub fn keycode(&self) -> Keycode {
        Keycode(self.raw.keysym.sym)
    }

    pub fn set_keycode(&mut self, keycode: Keycode) {
        self.raw.keysym.sym = keycode.0;
    }

    pub fn modifiers(&self) -> KeyModifiers {
        KeyModifiers(self.raw.keysym.modifiers)
    }

    pub fn set_modifiers(&mut self, modifiers: KeyModifiers) {
        self.raw.keysym.modifiers = modifiers.0;
    }

    /// `true` if any bit of `modifier` is active, so `CTRL` matches either control key.
    pub fn is_active(&self, modifier: KeyModifiers) -> bool {
        self.modifiers().intersects(modifier)
    }

    /// `true` if the event is for `scancode`.
    pub fn is_scancode(&self, scancode: Scancode) -> bool {
        self.scancode() == scancode
    }

    /// `true` if the event is for `keycode`.
    pub fn is_keycode(&self, keycode: Keycode) -> bool {
        self.keycode() == keycode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    #[test]
    fn key_fields() {
        let mut event = KeyboardEvent::new();
        assert_eq!(event.event_type(), EventType::KeyDown);
        assert!(event.is_released());

        event.set_state(ButtonState::Pressed);
        event.set_repeated(true);
        event.set_scancode(Scancode::W);
        event.set_keycode(Keycode::W);
        event.set_window_id(7);

        assert!(event.is_pressed());
        assert!(event.is_repeated());
        assert!(event.is_scancode(Scancode::W));
        assert!(event.is_keycode(Keycode::W));
        assert_eq!(event.window_id(), 7);
    }

    #[test]
    fn modifiers() {
        let mut event = KeyboardEvent::new();
        event.set_modifiers(KeyModifiers::LCTRL | KeyModifiers::CAPS);

        assert!(event.is_active(KeyModifiers::CTRL));
        assert!(event.is_active(KeyModifiers::LCTRL));
        assert!(!event.is_active(KeyModifiers::RCTRL));
        assert!(!event.is_active(KeyModifiers::SHIFT));
        assert!(event.modifiers().contains(KeyModifiers::CAPS));
        assert!(!event.modifiers().contains(KeyModifiers::CTRL));

        let mut mask = KeyModifiers::NONE;
        assert!(mask.is_empty());
        mask |= KeyModifiers::RALT;
        assert!(mask.intersects(KeyModifiers::ALT));
    }
}
