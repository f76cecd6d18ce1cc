//! Raw, fixed-layout event records.
//!
//! [`RawEvent`] is the record the native queue stores: a `#[repr(C)]` union of
//! per-category record structs. Every member starts with the same two words,
//! the category code ([`codes`]) and a millisecond timestamp, so the code can
//! always be read before deciding how to interpret the rest.
//!
//! ## Soundness
//! - Every member is plain data (integers, floats, byte arrays). No pointers,
//!   no `bool`, no enums, so every bit pattern is a valid value.
//! - Members spell out their padding as fields, so no member has implicit
//!   (uninitialized) padding bytes.
//! - A `RawEvent` can only be built through [`RawEvent::new`] or one of the
//!   `From<RawX>` conversions, both of which zero-fill the whole union first.
//!
//! Reading a record through the "wrong" member therefore yields meaningless
//! field values, never undefined behavior.
//!
//! ## Layout notes
//! Records mirror the native layouts field for field, with one exception: the
//! native drop record carries a heap-allocated path the receiver must free.
//! Here the path is stored inline in [`RawDrop::file`] as a NUL-terminated
//! byte buffer, so records remain self-contained values.

use bytemuck::Zeroable;

/// Size in bytes of every [`RawEvent`].
pub const RAW_EVENT_SIZE: usize = 256;

/// Capacity of the inline text buffer of text-input/editing records (including NUL).
pub const TEXT_SIZE: usize = 32;

/// Capacity of the inline path buffer of drop records (including NUL).
pub const DROP_FILE_SIZE: usize = 240;

/// Native category codes.
///
/// Values mirror the native enumeration exactly, including gaps.
pub mod codes {
    pub const FIRSTEVENT: u32 = 0;

    pub const QUIT: u32 = 0x100;
    pub const APP_TERMINATING: u32 = 0x101;
    pub const APP_LOWMEMORY: u32 = 0x102;
    pub const APP_WILLENTERBACKGROUND: u32 = 0x103;
    pub const APP_DIDENTERBACKGROUND: u32 = 0x104;
    pub const APP_WILLENTERFOREGROUND: u32 = 0x105;
    pub const APP_DIDENTERFOREGROUND: u32 = 0x106;
    pub const LOCALECHANGED: u32 = 0x107;

    pub const DISPLAYEVENT: u32 = 0x150;

    pub const WINDOWEVENT: u32 = 0x200;
    pub const SYSWMEVENT: u32 = 0x201;

    pub const KEYDOWN: u32 = 0x300;
    pub const KEYUP: u32 = 0x301;
    pub const TEXTEDITING: u32 = 0x302;
    pub const TEXTINPUT: u32 = 0x303;
    pub const KEYMAPCHANGED: u32 = 0x304;

    pub const MOUSEMOTION: u32 = 0x400;
    pub const MOUSEBUTTONDOWN: u32 = 0x401;
    pub const MOUSEBUTTONUP: u32 = 0x402;
    pub const MOUSEWHEEL: u32 = 0x403;

    pub const JOYAXISMOTION: u32 = 0x600;
    pub const JOYBALLMOTION: u32 = 0x601;
    pub const JOYHATMOTION: u32 = 0x602;
    pub const JOYBUTTONDOWN: u32 = 0x603;
    pub const JOYBUTTONUP: u32 = 0x604;
    pub const JOYDEVICEADDED: u32 = 0x605;
    pub const JOYDEVICEREMOVED: u32 = 0x606;

    pub const CONTROLLERAXISMOTION: u32 = 0x650;
    pub const CONTROLLERBUTTONDOWN: u32 = 0x651;
    pub const CONTROLLERBUTTONUP: u32 = 0x652;
    pub const CONTROLLERDEVICEADDED: u32 = 0x653;
    pub const CONTROLLERDEVICEREMOVED: u32 = 0x654;
    pub const CONTROLLERDEVICEREMAPPED: u32 = 0x655;
    pub const CONTROLLERTOUCHPADDOWN: u32 = 0x656;
    pub const CONTROLLERTOUCHPADMOTION: u32 = 0x657;
    pub const CONTROLLERTOUCHPADUP: u32 = 0x658;
    pub const CONTROLLERSENSORUPDATE: u32 = 0x659;

    pub const FINGERDOWN: u32 = 0x700;
    pub const FINGERUP: u32 = 0x701;
    pub const FINGERMOTION: u32 = 0x702;

    pub const DOLLARGESTURE: u32 = 0x800;
    pub const DOLLARRECORD: u32 = 0x801;
    pub const MULTIGESTURE: u32 = 0x802;

    pub const CLIPBOARDUPDATE: u32 = 0x900;

    pub const DROPFILE: u32 = 0x1000;
    pub const DROPTEXT: u32 = 0x1001;
    pub const DROPBEGIN: u32 = 0x1002;
    pub const DROPCOMPLETE: u32 = 0x1003;

    pub const AUDIODEVICEADDED: u32 = 0x1100;
    pub const AUDIODEVICEREMOVED: u32 = 0x1101;

    pub const SENSORUPDATE: u32 = 0x1200;

    pub const RENDER_TARGETS_RESET: u32 = 0x2000;
    pub const RENDER_DEVICE_RESET: u32 = 0x2001;

    /// First code available for user-defined events.
    pub const USEREVENT: u32 = 0x8000;
    /// Last valid event code.
    pub const LASTEVENT: u32 = 0xFFFF;
}

/// Header shared by every record; also the record of payloadless events.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawCommon {
    pub kind: u32,
    pub timestamp: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawDisplay {
    pub kind: u32,
    pub timestamp: u32,
    pub display: u32,
    pub event: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub data1: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawWindow {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub event: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub data1: i32,
    pub data2: i32,
}

/// Key symbol: physical scancode, virtual keycode and modifier mask.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawKeysym {
    pub scancode: i32,
    pub sym: i32,
    pub modifiers: u16,
    pub padding: u16,
    pub unused: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawKeyboard {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub state: u8,
    pub repeat: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub keysym: RawKeysym,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawTextEditing {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub text: [u8; TEXT_SIZE],
    pub start: i32,
    pub length: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawTextInput {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub text: [u8; TEXT_SIZE],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawMouseMotion {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawMouseButton {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub state: u8,
    pub clicks: u8,
    pub padding1: u8,
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawMouseWheel {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    pub direction: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawJoyAxis {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawJoyBall {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub ball: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub xrel: i16,
    pub yrel: i16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawJoyHat {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub hat: u8,
    pub value: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawJoyButton {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

/// Device record shared by joystick and controller added/removed/remapped events.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawDevice {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawControllerAxis {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawControllerButton {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawControllerTouchpad {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub touchpad: i32,
    pub finger: i32,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawControllerSensor {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub sensor: i32,
    pub data: [f32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawAudioDevice {
    pub kind: u32,
    pub timestamp: u32,
    pub which: u32,
    pub iscapture: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawTouchFinger {
    pub kind: u32,
    pub timestamp: u32,
    pub touch_id: i64,
    pub finger_id: i64,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
    pub window_id: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawMultiGesture {
    pub kind: u32,
    pub timestamp: u32,
    pub touch_id: i64,
    pub d_theta: f32,
    pub d_dist: f32,
    pub x: f32,
    pub y: f32,
    pub num_fingers: u16,
    pub padding: u16,
    pub padding2: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawDollarGesture {
    pub kind: u32,
    pub timestamp: u32,
    pub touch_id: i64,
    pub gesture_id: i64,
    pub num_fingers: u32,
    pub error: f32,
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable)]
pub struct RawDrop {
    pub kind: u32,
    pub timestamp: u32,
    pub file: [u8; DROP_FILE_SIZE],
    pub window_id: u32,
}

impl Default for RawDrop {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawSensor {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub data: [f32; 6],
}

/// User-defined record. `data1`/`data2` are opaque pointer-sized words that are
/// carried through the queue but never dereferenced.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct RawUser {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub code: i32,
    pub data1: usize,
    pub data2: usize,
}

/// A single native event record.
///
/// Fields are crate-private; build one with [`RawEvent::new`] or
/// `RawEvent::from(raw_record)`.
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawEvent {
    pub(crate) common: RawCommon,
    pub(crate) display: RawDisplay,
    pub(crate) window: RawWindow,
    pub(crate) key: RawKeyboard,
    pub(crate) edit: RawTextEditing,
    pub(crate) text: RawTextInput,
    pub(crate) motion: RawMouseMotion,
    pub(crate) button: RawMouseButton,
    pub(crate) wheel: RawMouseWheel,
    pub(crate) jaxis: RawJoyAxis,
    pub(crate) jball: RawJoyBall,
    pub(crate) jhat: RawJoyHat,
    pub(crate) jbutton: RawJoyButton,
    pub(crate) jdevice: RawDevice,
    pub(crate) caxis: RawControllerAxis,
    pub(crate) cbutton: RawControllerButton,
    pub(crate) cdevice: RawDevice,
    pub(crate) ctouchpad: RawControllerTouchpad,
    pub(crate) csensor: RawControllerSensor,
    pub(crate) adevice: RawAudioDevice,
    pub(crate) tfinger: RawTouchFinger,
    pub(crate) mgesture: RawMultiGesture,
    pub(crate) dgesture: RawDollarGesture,
    pub(crate) drop: RawDrop,
    pub(crate) sensor: RawSensor,
    pub(crate) user: RawUser,
    pub(crate) quit: RawCommon,
    padding: [u8; RAW_EVENT_SIZE],
}

// SAFETY: every member is `Zeroable`, so the all-zero union is valid.
unsafe impl Zeroable for RawEvent {}

const _: () = assert!(std::mem::size_of::<RawEvent>() == RAW_EVENT_SIZE);

impl RawEvent {
    /// Zero-filled record tagged with `kind`.
    pub fn new(kind: u32) -> Self {
        let mut raw = Self::zeroed();
        raw.common = RawCommon { kind, timestamp: 0 };
        raw
    }

    /// Category code (first word of every record).
    #[inline]
    pub fn kind(&self) -> u32 {
        // SAFETY: the header is a prefix of every member and the union is
        // always fully initialized.
        unsafe { self.common.kind }
    }

    /// Millisecond timestamp (second word of every record).
    #[inline]
    pub fn timestamp(&self) -> u32 {
        // SAFETY: see `kind`.
        unsafe { self.common.timestamp }
    }

    #[inline]
    pub(crate) fn set_timestamp(&mut self, timestamp: u32) {
        let kind = self.kind();
        self.common = RawCommon { kind, timestamp };
    }

    /// Raw bytes of the record.
    pub fn as_bytes(&self) -> &[u8; RAW_EVENT_SIZE] {
        // SAFETY: the padding member spans the entire union and every byte is
        // initialized (zero-filled on construction).
        unsafe { &self.padding }
    }
}

impl PartialEq for RawEvent {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl std::fmt::Debug for RawEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawEvent")
            .field("kind", &format_args!("{:#x}", self.kind()))
            .field("timestamp", &self.timestamp())
            .finish_non_exhaustive()
    }
}

macro_rules! raw_from {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl From<$ty> for RawEvent {
                fn from(record: $ty) -> Self {
                    let mut raw = RawEvent::zeroed();
                    raw.$field = record;
                    raw
                }
            }
        )*
    };
}

raw_from! {
    RawCommon => common,
    RawDisplay => display,
    RawWindow => window,
    RawKeyboard => key,
    RawTextEditing => edit,
    RawTextInput => text,
    RawMouseMotion => motion,
    RawMouseButton => button,
    RawMouseWheel => wheel,
    RawJoyAxis => jaxis,
    RawJoyBall => jball,
    RawJoyHat => jhat,
    RawJoyButton => jbutton,
    RawDevice => jdevice,
    RawControllerAxis => caxis,
    RawControllerButton => cbutton,
    RawControllerTouchpad => ctouchpad,
    RawControllerSensor => csensor,
    RawAudioDevice => adevice,
    RawTouchFinger => tfinger,
    RawMultiGesture => mgesture,
    RawDollarGesture => dgesture,
    RawDrop => drop,
    RawSensor => sensor,
    RawUser => user,
}

/// Copy `s` into a NUL-terminated buffer, truncating at a char boundary.
pub(crate) fn write_cstr<const N: usize>(buf: &mut [u8; N], s: &str) {
    let mut end = s.len().min(N.saturating_sub(1));
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    *buf = [0; N];
    buf[..end].copy_from_slice(&s.as_bytes()[..end]);
}

/// Read a NUL-terminated buffer back as text (lossy for invalid UTF-8).
pub(crate) fn read_cstr(buf: &[u8]) -> std::borrow::Cow<'_, str> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_zeroed_apart_from_kind() {
        let raw = RawEvent::new(codes::QUIT);
        assert_eq!(raw.kind(), codes::QUIT);
        assert_eq!(raw.timestamp(), 0);
        assert!(raw.as_bytes()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn record_conversion_keeps_header() {
        let raw: RawEvent = RawMouseMotion {
            kind: codes::MOUSEMOTION,
            timestamp: 42,
            x: 839,
            y: 351,
            ..Zeroable::zeroed()
        }
        .into();

        assert_eq!(raw.kind(), codes::MOUSEMOTION);
        assert_eq!(raw.timestamp(), 42);
        let motion = unsafe { raw.motion };
        assert_eq!((motion.x, motion.y), (839, 351));
    }

    #[test]
    fn set_timestamp_keeps_kind_and_payload() {
        let mut raw: RawEvent = RawJoyAxis {
            kind: codes::JOYAXISMOTION,
            value: -1200,
            ..Zeroable::zeroed()
        }
        .into();
        raw.set_timestamp(7);

        assert_eq!(raw.kind(), codes::JOYAXISMOTION);
        assert_eq!(raw.timestamp(), 7);
        assert_eq!(unsafe { raw.jaxis }.value, -1200);
    }

    #[test]
    fn cstr_helpers_truncate_on_char_boundary() {
        let mut buf = [0u8; 4];
        write_cstr(&mut buf, "aé€");
        // "a" (1) + "é" (2) fits in the 3 usable bytes, "€" does not.
        assert_eq!(read_cstr(&buf), "aé");

        write_cstr(&mut buf, "");
        assert_eq!(read_cstr(&buf), "");
    }
}
