//! The [`Event`] discriminated union.
//!
//! An `Event` mirrors one native record at a time. It holds exactly one typed
//! variant (or nothing, when [`Event::Empty`]), selected by the record's
//! category code in a single switch in [`Event::from_raw`].
//!
//! ## Typed access
//! - [`Event::is`] tests the active variant by type;
//! - [`Event::get`] returns it or [`EventError::TypeMismatch`];
//! - [`Event::try_get`] returns `None` on mismatch.
//!
//! Accessors never mutate the event, including on failure.
//!
//! ## Queue facade
//! The associated functions [`Event::poll`], [`Event::push`], [`Event::flush`],
//! [`Event::flush_all`], [`Event::queue_size`] and [`Event::in_queue`] act on
//! the process-wide queue ([`queue::global`](crate::queue::global)). The `_in`
//! variants take an explicit [`EventQueue`] instead.
//!
//! ```no_run
//! use evtype::{Event, MouseMotionEvent, QuitEvent};
//!
//! let mut event = Event::default();
//! 'main: loop {
//!     while event.poll() {
//!         if event.is::<QuitEvent>() {
//!             break 'main;
//!         }
//!         if let Some(motion) = event.try_get::<MouseMotionEvent>() {
//!             println!("pointer at {},{}", motion.x(), motion.y());
//!         }
//!     }
//! }
//! ```

use crate::error::{EventError, QueueError};
use crate::event_type::EventType;
use crate::queue::{self, EventQueue};
use crate::raw::{codes, RawEvent};
use crate::variants::*;

/// One event, as read from (or destined for) the native queue.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Event {
    /// No event held.
    #[default]
    Empty,
    Quit(QuitEvent),
    Common(CommonEvent),
    #[cfg(feature = "v2-0-14")]
    Display(DisplayEvent),
    Window(WindowEvent),
    Keyboard(KeyboardEvent),
    TextEditing(TextEditingEvent),
    TextInput(TextInputEvent),
    MouseMotion(MouseMotionEvent),
    MouseButton(MouseButtonEvent),
    MouseWheel(MouseWheelEvent),
    JoyAxis(JoyAxisEvent),
    JoyBall(JoyBallEvent),
    JoyHat(JoyHatEvent),
    JoyButton(JoyButtonEvent),
    JoyDevice(JoyDeviceEvent),
    ControllerAxis(ControllerAxisEvent),
    ControllerButton(ControllerButtonEvent),
    ControllerDevice(ControllerDeviceEvent),
    #[cfg(feature = "v2-0-14")]
    ControllerTouchpad(ControllerTouchpadEvent),
    #[cfg(feature = "v2-0-14")]
    ControllerSensor(ControllerSensorEvent),
    AudioDevice(AudioDeviceEvent),
    TouchFinger(TouchFingerEvent),
    MultiGesture(MultiGestureEvent),
    DollarGesture(DollarGestureEvent),
    Drop(DropEvent),
    Sensor(SensorEvent),
    User(UserEvent),
    /// Record with an unrecognized category code.
    Unknown(UnknownEvent),
}

impl Event {
    /// Interprets a native record according to its category code.
    ///
    /// Never fails: unrecognized codes produce [`Event::Unknown`].
    pub fn from_raw(raw: &RawEvent) -> Self {
        let kind = raw.kind();
        match kind {
            codes::QUIT => Event::Quit(QuitEvent::from_raw(raw)),

            codes::APP_TERMINATING
            | codes::APP_LOWMEMORY
            | codes::APP_WILLENTERBACKGROUND
            | codes::APP_DIDENTERBACKGROUND
            | codes::APP_WILLENTERFOREGROUND
            | codes::APP_DIDENTERFOREGROUND
            | codes::SYSWMEVENT
            | codes::KEYMAPCHANGED
            | codes::CLIPBOARDUPDATE
            | codes::RENDER_TARGETS_RESET
            | codes::RENDER_DEVICE_RESET => Event::Common(CommonEvent::from_raw(raw)),
            #[cfg(feature = "v2-0-14")]
            codes::LOCALECHANGED => Event::Common(CommonEvent::from_raw(raw)),

            #[cfg(feature = "v2-0-14")]
            codes::DISPLAYEVENT => Event::Display(DisplayEvent::from_raw(raw)),

            codes::WINDOWEVENT => Event::Window(WindowEvent::from_raw(raw)),

            codes::KEYDOWN | codes::KEYUP => Event::Keyboard(KeyboardEvent::from_raw(raw)),
            codes::TEXTEDITING => Event::TextEditing(TextEditingEvent::from_raw(raw)),
            codes::TEXTINPUT => Event::TextInput(TextInputEvent::from_raw(raw)),

            codes::MOUSEMOTION => Event::MouseMotion(MouseMotionEvent::from_raw(raw)),
            codes::MOUSEBUTTONDOWN | codes::MOUSEBUTTONUP => {
                Event::MouseButton(MouseButtonEvent::from_raw(raw))
            }
            codes::MOUSEWHEEL => Event::MouseWheel(MouseWheelEvent::from_raw(raw)),

            codes::JOYAXISMOTION => Event::JoyAxis(JoyAxisEvent::from_raw(raw)),
            codes::JOYBALLMOTION => Event::JoyBall(JoyBallEvent::from_raw(raw)),
            codes::JOYHATMOTION => Event::JoyHat(JoyHatEvent::from_raw(raw)),
            codes::JOYBUTTONDOWN | codes::JOYBUTTONUP => {
                Event::JoyButton(JoyButtonEvent::from_raw(raw))
            }
            codes::JOYDEVICEADDED | codes::JOYDEVICEREMOVED => {
                Event::JoyDevice(JoyDeviceEvent::from_raw(raw))
            }

            codes::CONTROLLERAXISMOTION => {
                Event::ControllerAxis(ControllerAxisEvent::from_raw(raw))
            }
            codes::CONTROLLERBUTTONDOWN | codes::CONTROLLERBUTTONUP => {
                Event::ControllerButton(ControllerButtonEvent::from_raw(raw))
            }
            codes::CONTROLLERDEVICEADDED
            | codes::CONTROLLERDEVICEREMOVED
            | codes::CONTROLLERDEVICEREMAPPED => {
                Event::ControllerDevice(ControllerDeviceEvent::from_raw(raw))
            }
            #[cfg(feature = "v2-0-14")]
            codes::CONTROLLERTOUCHPADDOWN
            | codes::CONTROLLERTOUCHPADMOTION
            | codes::CONTROLLERTOUCHPADUP => {
                Event::ControllerTouchpad(ControllerTouchpadEvent::from_raw(raw))
            }
            #[cfg(feature = "v2-0-14")]
            codes::CONTROLLERSENSORUPDATE => {
                Event::ControllerSensor(ControllerSensorEvent::from_raw(raw))
            }

            codes::FINGERDOWN | codes::FINGERUP | codes::FINGERMOTION => {
                Event::TouchFinger(TouchFingerEvent::from_raw(raw))
            }

            codes::DOLLARGESTURE | codes::DOLLARRECORD => {
                Event::DollarGesture(DollarGestureEvent::from_raw(raw))
            }
            codes::MULTIGESTURE => Event::MultiGesture(MultiGestureEvent::from_raw(raw)),

            codes::DROPFILE | codes::DROPTEXT | codes::DROPBEGIN | codes::DROPCOMPLETE => {
                Event::Drop(DropEvent::from_raw(raw))
            }

            codes::AUDIODEVICEADDED | codes::AUDIODEVICEREMOVED => {
                Event::AudioDevice(AudioDeviceEvent::from_raw(raw))
            }

            codes::SENSORUPDATE => Event::Sensor(SensorEvent::from_raw(raw)),

            codes::USEREVENT..=codes::LASTEVENT => Event::User(UserEvent::from_raw(raw)),

            _ => Event::Unknown(UnknownEvent::from_raw(raw)),
        }
    }

    /// Native record for the held variant, or `None` when empty.
    pub fn to_raw(&self) -> Option<RawEvent> {
        let raw = match self {
            Event::Empty => return None,
            Event::Quit(e) => e.to_raw(),
            Event::Common(e) => e.to_raw(),
            #[cfg(feature = "v2-0-14")]
            Event::Display(e) => e.to_raw(),
            Event::Window(e) => e.to_raw(),
            Event::Keyboard(e) => e.to_raw(),
            Event::TextEditing(e) => e.to_raw(),
            Event::TextInput(e) => e.to_raw(),
            Event::MouseMotion(e) => e.to_raw(),
            Event::MouseButton(e) => e.to_raw(),
            Event::MouseWheel(e) => e.to_raw(),
            Event::JoyAxis(e) => e.to_raw(),
            Event::JoyBall(e) => e.to_raw(),
            Event::JoyHat(e) => e.to_raw(),
            Event::JoyButton(e) => e.to_raw(),
            Event::JoyDevice(e) => e.to_raw(),
            Event::ControllerAxis(e) => e.to_raw(),
            Event::ControllerButton(e) => e.to_raw(),
            Event::ControllerDevice(e) => e.to_raw(),
            #[cfg(feature = "v2-0-14")]
            Event::ControllerTouchpad(e) => e.to_raw(),
            #[cfg(feature = "v2-0-14")]
            Event::ControllerSensor(e) => e.to_raw(),
            Event::AudioDevice(e) => e.to_raw(),
            Event::TouchFinger(e) => e.to_raw(),
            Event::MultiGesture(e) => e.to_raw(),
            Event::DollarGesture(e) => e.to_raw(),
            Event::Drop(e) => e.to_raw(),
            Event::Sensor(e) => e.to_raw(),
            Event::User(e) => e.to_raw(),
            Event::Unknown(e) => e.to_raw(),
        };
        Some(raw)
    }

    /// `true` if no event is held.
    pub fn is_empty(&self) -> bool {
        matches!(self, Event::Empty)
    }

    /// Category of the held event; `None` when empty.
    pub fn event_type(&self) -> Option<EventType> {
        self.to_raw().map(|raw| EventType::from_raw(raw.kind()))
    }

    /// Timestamp of the held event; `None` when empty.
    pub fn timestamp(&self) -> Option<u32> {
        self.to_raw().map(|raw| raw.timestamp())
    }

    /// Window the event is addressed to, for variants that carry one.
    pub fn window_id(&self) -> Option<u32> {
        match self {
            Event::Window(e) => Some(e.window_id()),
            Event::Keyboard(e) => Some(e.window_id()),
            Event::TextEditing(e) => Some(e.window_id()),
            Event::TextInput(e) => Some(e.window_id()),
            Event::MouseMotion(e) => Some(e.window_id()),
            Event::MouseButton(e) => Some(e.window_id()),
            Event::MouseWheel(e) => Some(e.window_id()),
            Event::TouchFinger(e) => Some(e.window_id()),
            Event::Drop(e) => Some(e.window_id()),
            Event::User(e) => Some(e.window_id()),
            _ => None,
        }
    }

    /// `true` if the held variant is `T`.
    pub fn is<T: EventVariant>(&self) -> bool {
        T::from_event(self).is_some()
    }

    /// The held variant as `T`.
    ///
    /// Fails with [`EventError::TypeMismatch`] if the event holds another
    /// variant (or nothing).
    pub fn get<T: EventVariant>(&self) -> Result<&T, EventError> {
        T::from_event(self).ok_or_else(|| self.mismatch::<T>())
    }

    pub fn get_mut<T: EventVariant>(&mut self) -> Result<&mut T, EventError> {
        let err = self.mismatch::<T>();
        T::from_event_mut(self).ok_or(err)
    }

    /// The held variant as `T`, or `None` on mismatch.
    pub fn try_get<T: EventVariant>(&self) -> Option<&T> {
        T::from_event(self)
    }

    pub fn try_get_mut<T: EventVariant>(&mut self) -> Option<&mut T> {
        T::from_event_mut(self)
    }

    fn mismatch<T: EventVariant>(&self) -> EventError {
        EventError::TypeMismatch {
            expected: T::NAME,
            found: self.event_type(),
        }
    }

    /// Takes the oldest record from the global queue into `self`.
    ///
    /// Returns `false` and leaves `self` empty when the queue has no events.
    pub fn poll(&mut self) -> bool {
        self.poll_from(queue::global())
    }

    /// Like [`poll`](Event::poll), against an explicit queue.
    pub fn poll_from(&mut self, queue: &EventQueue) -> bool {
        match queue.poll() {
            Some(raw) => {
                *self = Event::from_raw(&raw);
                true
            }
            None => {
                *self = Event::Empty;
                false
            }
        }
    }

    /// Appends an event to the tail of the global queue.
    pub fn push(event: impl Into<Event>) -> Result<(), QueueError> {
        Self::push_in(queue::global(), event)
    }

    pub fn push_in(queue: &EventQueue, event: impl Into<Event>) -> Result<(), QueueError> {
        let raw = event.into().to_raw().ok_or(QueueError::EmptyEvent)?;
        queue.push(raw)
    }

    /// Drops the oldest pending event of any type.
    pub fn flush() {
        queue::global().flush(None);
    }

    /// Drops the oldest pending event of type `ty`.
    pub fn flush_type(ty: EventType) {
        queue::global().flush(Some(ty));
    }

    /// Pumps sources, then drops every pending event.
    pub fn flush_all() {
        queue::global().flush_all(None);
    }

    /// Pumps sources, then drops every pending event of type `ty`.
    pub fn flush_all_type(ty: EventType) {
        queue::global().flush_all(Some(ty));
    }

    /// Number of pending events, optionally restricted to one type.
    pub fn queue_size(ty: Option<EventType>) -> usize {
        queue::global().len(ty)
    }

    /// `true` if at least one event of type `ty` is pending.
    pub fn in_queue(ty: EventType) -> bool {
        queue::global().contains(ty)
    }

    /// Pumps registered sources into the global queue.
    pub fn update() {
        queue::global().pump();
    }
}
