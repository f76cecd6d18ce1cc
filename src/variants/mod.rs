//! Typed event variants.
//!
//! Each type here wraps one raw record shape by value and exposes its fields
//! through typed accessors. Variants are plain values: they never own an
//! external resource, and copying one copies the whole payload.
//!
//! Every variant can be built three ways:
//! - `Variant::new()` (or `Default`): zeroed payload tagged with the variant's
//!   default category (e.g. `KeyDown` for [`KeyboardEvent`]);
//! - `Variant::from(raw_record)`: from a raw record of matching shape;
//! - [`EventVariant::from_raw`]: from a whole [`RawEvent`]. This does not check
//!   the category code; [`Event::from_raw`](crate::Event::from_raw) does.
//!
//! Setters are provided for building synthetic events to push into the queue.

use crate::event::Event;
use crate::raw::RawEvent;

/// Defines a variant type over a raw record: the newtype, its header
/// accessors and its [`EventVariant`] impl.
macro_rules! event_variant {
    (
        $(#[$meta:meta])*
        $name:ident($raw:ty) => Event::$event:ident, member = $member:ident, default = $default:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name {
            pub(crate) raw: $raw,
        }

        impl $name {
            /// Zeroed event tagged with the default category.
            pub fn new() -> Self {
                let mut raw = <$raw as bytemuck::Zeroable>::zeroed();
                raw.kind = $default;
                Self { raw }
            }

            pub fn event_type(&self) -> $crate::EventType {
                $crate::EventType::from_raw(self.raw.kind)
            }

            /// Retags the event. The payload is left untouched.
            ///
            /// Only categories carried by this variant are accepted; anything
            /// else fails with [`EventError::ForeignCategory`](crate::EventError::ForeignCategory)
            /// and leaves the event as it was.
            pub fn set_event_type(
                &mut self,
                ty: $crate::EventType,
            ) -> std::result::Result<(), $crate::EventError> {
                let code = ty.to_raw();
                if !<Self as $crate::variants::EventVariant>::carries(code) {
                    return Err($crate::EventError::ForeignCategory {
                        variant: stringify!($name),
                        found: ty,
                    });
                }
                self.raw.kind = code;
                Ok(())
            }

            /// Zeroed event tagged with a code known to belong to this variant.
            #[allow(dead_code)]
            pub(crate) fn tagged(code: u32) -> Self {
                debug_assert!(<Self as $crate::variants::EventVariant>::carries(code));
                let mut event = Self::new();
                event.raw.kind = code;
                event
            }

            /// Milliseconds since the queue was created.
            pub fn timestamp(&self) -> u32 {
                self.raw.timestamp
            }

            pub fn set_timestamp(&mut self, timestamp: u32) {
                self.raw.timestamp = timestamp;
            }

            /// The underlying raw record.
            pub fn raw(&self) -> &$raw {
                &self.raw
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$raw> for $name {
            fn from(raw: $raw) -> Self {
                Self { raw }
            }
        }

        impl From<$name> for $crate::Event {
            fn from(event: $name) -> Self {
                $crate::Event::$event(event)
            }
        }

        impl $crate::variants::EventVariant for $name {
            const NAME: &'static str = stringify!($name);
            const DEFAULT_TYPE: u32 = $default;

            fn from_raw(raw: &$crate::RawEvent) -> Self {
                // SAFETY: every `RawEvent` is fully initialized plain data, so
                // any member can be read regardless of the category code.
                Self { raw: unsafe { raw.$member } }
            }

            fn to_raw(&self) -> $crate::RawEvent {
                $crate::RawEvent::from(self.raw)
            }

            fn from_event(event: &$crate::Event) -> Option<&Self> {
                match event {
                    $crate::Event::$event(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_event_mut(event: &mut $crate::Event) -> Option<&mut Self> {
                match event {
                    $crate::Event::$event(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_event(self) -> $crate::Event {
                $crate::Event::$event(self)
            }
        }
    };
}

mod audio;
mod common;
mod controller;
#[cfg(feature = "v2-0-14")]
mod display;
mod drop;
mod gesture;
mod joystick;
mod keyboard;
mod mouse;
mod sensor;
mod text;
mod touch;
mod user;
mod window;

pub use audio::AudioDeviceEvent;
pub use common::{CommonEvent, QuitEvent, UnknownEvent};
pub use controller::{
    ControllerAxis, ControllerAxisEvent, ControllerButton, ControllerButtonEvent,
    ControllerDeviceEvent,
};
#[cfg(feature = "v2-0-14")]
pub use controller::{ControllerSensorEvent, ControllerTouchpadEvent};
#[cfg(feature = "v2-0-14")]
pub use display::{DisplayEvent, DisplayEventId, Orientation};
pub use drop::DropEvent;
pub use gesture::{DollarGestureEvent, MultiGestureEvent};
pub use joystick::{
    HatState, JoyAxisEvent, JoyBallEvent, JoyButtonEvent, JoyDeviceEvent, JoyHatEvent,
};
pub use keyboard::{KeyModifiers, KeyboardEvent, Keycode, Scancode};
pub use mouse::{MouseButton, MouseButtonEvent, MouseMotionEvent, MouseWheelDirection, MouseWheelEvent};
pub use sensor::{SensorEvent, SensorKind};
pub use text::{TextEditingEvent, TextInputEvent};
pub use touch::TouchFingerEvent;
pub use user::UserEvent;
pub use window::{WindowEvent, WindowEventId};

/// Seam between [`Event`] and the concrete variant types.
///
/// Implemented by every variant; used by [`Event::is`], [`Event::get`] and
/// [`Event::try_get`] to select a variant by type.
pub trait EventVariant: Copy + Sized {
    /// Type name reported in mismatch errors.
    const NAME: &'static str;

    /// Category code used by `new()`.
    const DEFAULT_TYPE: u32;

    /// Copies the matching member out of `raw` without checking its code.
    fn from_raw(raw: &RawEvent) -> Self;

    /// `true` if [`Event::from_raw`] maps records tagged `code` to this variant.
    fn carries(code: u32) -> bool {
        Self::from_event(&Event::from_raw(&RawEvent::new(code))).is_some()
    }

    /// Converts back into a full native record.
    fn to_raw(&self) -> RawEvent;

    fn from_event(event: &Event) -> Option<&Self>;

    fn from_event_mut(event: &mut Event) -> Option<&mut Self>;

    fn into_event(self) -> Event;
}

/// Pressed/released state carried by key and button events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Released,
    Pressed,
}

impl ButtonState {
    pub(crate) fn from_raw(state: u8) -> Self {
        if state == 0 {
            ButtonState::Released
        } else {
            ButtonState::Pressed
        }
    }

    pub(crate) fn to_raw(self) -> u8 {
        match self {
            ButtonState::Released => 0,
            ButtonState::Pressed => 1,
        }
    }
}
