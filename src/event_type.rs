//! Event categories.
//!
//! [`EventType`] names every native category code. It is the tag used for
//! queue queries (`queue_size`, `in_queue`, `flush`) and is reported by
//! [`Event::event_type`](crate::Event::event_type).
//!
//! ## Conventions
//! - Conversion is lossless: `EventType::from_raw(code).to_raw() == code` for
//!   every `u32`.
//! - Codes in `0x8000..=0xFFFF` are user-defined and map to [`EventType::User`].
//! - Any other code without a named member maps to [`EventType::Unknown`].
//! - Members introduced by native library 2.0.14 exist only with the
//!   `v2-0-14` feature; without it, their codes are `Unknown`.

use crate::raw::codes;
use serde::{Deserialize, Serialize};

/// Category of a native event record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Quit,
    AppTerminating,
    AppLowMemory,
    AppWillEnterBackground,
    AppDidEnterBackground,
    AppWillEnterForeground,
    AppDidEnterForeground,
    #[cfg(feature = "v2-0-14")]
    LocaleChanged,

    #[cfg(feature = "v2-0-14")]
    Display,

    Window,
    System,

    KeyDown,
    KeyUp,
    TextEditing,
    TextInput,
    KeymapChanged,

    MouseMotion,
    MouseButtonDown,
    MouseButtonUp,
    MouseWheel,

    JoyAxisMotion,
    JoyBallMotion,
    JoyHatMotion,
    JoyButtonDown,
    JoyButtonUp,
    JoyDeviceAdded,
    JoyDeviceRemoved,

    ControllerAxisMotion,
    ControllerButtonDown,
    ControllerButtonUp,
    ControllerDeviceAdded,
    ControllerDeviceRemoved,
    ControllerDeviceRemapped,
    #[cfg(feature = "v2-0-14")]
    ControllerTouchpadDown,
    #[cfg(feature = "v2-0-14")]
    ControllerTouchpadMotion,
    #[cfg(feature = "v2-0-14")]
    ControllerTouchpadUp,
    #[cfg(feature = "v2-0-14")]
    ControllerSensorUpdate,

    FingerDown,
    FingerUp,
    FingerMotion,

    DollarGesture,
    DollarRecord,
    MultiGesture,

    ClipboardUpdate,

    DropFile,
    DropText,
    DropBegin,
    DropComplete,

    AudioDeviceAdded,
    AudioDeviceRemoved,

    SensorUpdate,

    RenderTargetsReset,
    RenderDeviceReset,

    /// User-defined event, carrying its raw code (`0x8000..=0xFFFF`).
    User(u32),

    /// Code without a named member, carried verbatim.
    Unknown(u32),
}

impl EventType {
    /// Maps a native code to its category.
    pub fn from_raw(code: u32) -> Self {
        use EventType::*;
        match code {
            codes::QUIT => Quit,
            codes::APP_TERMINATING => AppTerminating,
            codes::APP_LOWMEMORY => AppLowMemory,
            codes::APP_WILLENTERBACKGROUND => AppWillEnterBackground,
            codes::APP_DIDENTERBACKGROUND => AppDidEnterBackground,
            codes::APP_WILLENTERFOREGROUND => AppWillEnterForeground,
            codes::APP_DIDENTERFOREGROUND => AppDidEnterForeground,
            #[cfg(feature = "v2-0-14")]
            codes::LOCALECHANGED => LocaleChanged,

            #[cfg(feature = "v2-0-14")]
            codes::DISPLAYEVENT => Display,

            codes::WINDOWEVENT => Window,
            codes::SYSWMEVENT => System,

            codes::KEYDOWN => KeyDown,
            codes::KEYUP => KeyUp,
            codes::TEXTEDITING => TextEditing,
            codes::TEXTINPUT => TextInput,
            codes::KEYMAPCHANGED => KeymapChanged,

            codes::MOUSEMOTION => MouseMotion,
            codes::MOUSEBUTTONDOWN => MouseButtonDown,
            codes::MOUSEBUTTONUP => MouseButtonUp,
            codes::MOUSEWHEEL => MouseWheel,

            codes::JOYAXISMOTION => JoyAxisMotion,
            codes::JOYBALLMOTION => JoyBallMotion,
            codes::JOYHATMOTION => JoyHatMotion,
            codes::JOYBUTTONDOWN => JoyButtonDown,
            codes::JOYBUTTONUP => JoyButtonUp,
            codes::JOYDEVICEADDED => JoyDeviceAdded,
            codes::JOYDEVICEREMOVED => JoyDeviceRemoved,

            codes::CONTROLLERAXISMOTION => ControllerAxisMotion,
            codes::CONTROLLERBUTTONDOWN => ControllerButtonDown,
            codes::CONTROLLERBUTTONUP => ControllerButtonUp,
            codes::CONTROLLERDEVICEADDED => ControllerDeviceAdded,
            codes::CONTROLLERDEVICEREMOVED => ControllerDeviceRemoved,
            codes::CONTROLLERDEVICEREMAPPED => ControllerDeviceRemapped,
            #[cfg(feature = "v2-0-14")]
            codes::CONTROLLERTOUCHPADDOWN => ControllerTouchpadDown,
            #[cfg(feature = "v2-0-14")]
            codes::CONTROLLERTOUCHPADMOTION => ControllerTouchpadMotion,
            #[cfg(feature = "v2-0-14")]
            codes::CONTROLLERTOUCHPADUP => ControllerTouchpadUp,
            #[cfg(feature = "v2-0-14")]
            codes::CONTROLLERSENSORUPDATE => ControllerSensorUpdate,

            codes::FINGERDOWN => FingerDown,
            codes::FINGERUP => FingerUp,
            codes::FINGERMOTION => FingerMotion,

            codes::DOLLARGESTURE => DollarGesture,
            codes::DOLLARRECORD => DollarRecord,
            codes::MULTIGESTURE => MultiGesture,

            codes::CLIPBOARDUPDATE => ClipboardUpdate,

            codes::DROPFILE => DropFile,
            codes::DROPTEXT => DropText,
            codes::DROPBEGIN => DropBegin,
            codes::DROPCOMPLETE => DropComplete,

            codes::AUDIODEVICEADDED => AudioDeviceAdded,
            codes::AUDIODEVICEREMOVED => AudioDeviceRemoved,

            codes::SENSORUPDATE => SensorUpdate,

            codes::RENDER_TARGETS_RESET => RenderTargetsReset,
            codes::RENDER_DEVICE_RESET => RenderDeviceReset,

            codes::USEREVENT..=codes::LASTEVENT => User(code),
            other => Unknown(other),
        }
    }

    /// Native code of this category.
    pub fn to_raw(self) -> u32 {
        use EventType::*;
        match self {
            Quit => codes::QUIT,
            AppTerminating => codes::APP_TERMINATING,
            AppLowMemory => codes::APP_LOWMEMORY,
            AppWillEnterBackground => codes::APP_WILLENTERBACKGROUND,
            AppDidEnterBackground => codes::APP_DIDENTERBACKGROUND,
            AppWillEnterForeground => codes::APP_WILLENTERFOREGROUND,
            AppDidEnterForeground => codes::APP_DIDENTERFOREGROUND,
            #[cfg(feature = "v2-0-14")]
            LocaleChanged => codes::LOCALECHANGED,

            #[cfg(feature = "v2-0-14")]
            Display => codes::DISPLAYEVENT,

            Window => codes::WINDOWEVENT,
            System => codes::SYSWMEVENT,

            KeyDown => codes::KEYDOWN,
            KeyUp => codes::KEYUP,
            TextEditing => codes::TEXTEDITING,
            TextInput => codes::TEXTINPUT,
            KeymapChanged => codes::KEYMAPCHANGED,

            MouseMotion => codes::MOUSEMOTION,
            MouseButtonDown => codes::MOUSEBUTTONDOWN,
            MouseButtonUp => codes::MOUSEBUTTONUP,
            MouseWheel => codes::MOUSEWHEEL,

            JoyAxisMotion => codes::JOYAXISMOTION,
            JoyBallMotion => codes::JOYBALLMOTION,
            JoyHatMotion => codes::JOYHATMOTION,
            JoyButtonDown => codes::JOYBUTTONDOWN,
            JoyButtonUp => codes::JOYBUTTONUP,
            JoyDeviceAdded => codes::JOYDEVICEADDED,
            JoyDeviceRemoved => codes::JOYDEVICEREMOVED,

            ControllerAxisMotion => codes::CONTROLLERAXISMOTION,
            ControllerButtonDown => codes::CONTROLLERBUTTONDOWN,
            ControllerButtonUp => codes::CONTROLLERBUTTONUP,
            ControllerDeviceAdded => codes::CONTROLLERDEVICEADDED,
            ControllerDeviceRemoved => codes::CONTROLLERDEVICEREMOVED,
            ControllerDeviceRemapped => codes::CONTROLLERDEVICEREMAPPED,
            #[cfg(feature = "v2-0-14")]
            ControllerTouchpadDown => codes::CONTROLLERTOUCHPADDOWN,
            #[cfg(feature = "v2-0-14")]
            ControllerTouchpadMotion => codes::CONTROLLERTOUCHPADMOTION,
            #[cfg(feature = "v2-0-14")]
            ControllerTouchpadUp => codes::CONTROLLERTOUCHPADUP,
            #[cfg(feature = "v2-0-14")]
            ControllerSensorUpdate => codes::CONTROLLERSENSORUPDATE,

            FingerDown => codes::FINGERDOWN,
            FingerUp => codes::FINGERUP,
            FingerMotion => codes::FINGERMOTION,

            DollarGesture => codes::DOLLARGESTURE,
            DollarRecord => codes::DOLLARRECORD,
            MultiGesture => codes::MULTIGESTURE,

            ClipboardUpdate => codes::CLIPBOARDUPDATE,

            DropFile => codes::DROPFILE,
            DropText => codes::DROPTEXT,
            DropBegin => codes::DROPBEGIN,
            DropComplete => codes::DROPCOMPLETE,

            AudioDeviceAdded => codes::AUDIODEVICEADDED,
            AudioDeviceRemoved => codes::AUDIODEVICEREMOVED,

            SensorUpdate => codes::SENSORUPDATE,

            RenderTargetsReset => codes::RENDER_TARGETS_RESET,
            RenderDeviceReset => codes::RENDER_DEVICE_RESET,

            User(code) | Unknown(code) => code,
        }
    }

    /// `true` for key down/up.
    pub fn is_keyboard(self) -> bool {
        matches!(self, EventType::KeyDown | EventType::KeyUp)
    }

    /// `true` for mouse motion, button and wheel events.
    pub fn is_mouse(self) -> bool {
        matches!(
            self,
            EventType::MouseMotion
                | EventType::MouseButtonDown
                | EventType::MouseButtonUp
                | EventType::MouseWheel
        )
    }

    pub fn is_user(self) -> bool {
        matches!(self, EventType::User(_))
    }
}

impl From<u32> for EventType {
    fn from(code: u32) -> Self {
        Self::from_raw(code)
    }
}

impl From<EventType> for u32 {
    fn from(ty: EventType) -> Self {
        ty.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_converts_back_losslessly() {
        for code in (0..=0x2100).chain(0x7FF0..=0x8010).chain([0xFFFF, 0x1_0000, u32::MAX]) {
            assert_eq!(EventType::from_raw(code).to_raw(), code, "code {code:#x}");
        }
    }

    #[test]
    fn user_range_is_user() {
        assert_eq!(EventType::from_raw(codes::USEREVENT), EventType::User(0x8000));
        assert_eq!(EventType::from_raw(codes::LASTEVENT), EventType::User(0xFFFF));
        assert!(EventType::from_raw(0x8123).is_user());
        assert_eq!(EventType::from_raw(0x1_0000), EventType::Unknown(0x1_0000));
    }

    #[test]
    fn gaps_are_unknown() {
        assert_eq!(EventType::from_raw(0x500), EventType::Unknown(0x500));
        assert_eq!(EventType::from_raw(codes::FIRSTEVENT), EventType::Unknown(0));
    }

    #[cfg(feature = "v2-0-14")]
    #[test]
    fn version_gated_codes_are_named() {
        assert_eq!(EventType::from_raw(codes::DISPLAYEVENT), EventType::Display);
        assert_eq!(
            EventType::from_raw(codes::CONTROLLERSENSORUPDATE),
            EventType::ControllerSensorUpdate
        );
    }

    #[cfg(not(feature = "v2-0-14"))]
    #[test]
    fn version_gated_codes_are_unknown() {
        assert_eq!(
            EventType::from_raw(codes::DISPLAYEVENT),
            EventType::Unknown(codes::DISPLAYEVENT)
        );
    }

    #[test]
    fn category_helpers() {
        assert!(EventType::KeyUp.is_keyboard());
        assert!(!EventType::TextInput.is_keyboard());
        assert!(EventType::MouseWheel.is_mouse());
        assert!(!EventType::FingerMotion.is_mouse());
    }
}
