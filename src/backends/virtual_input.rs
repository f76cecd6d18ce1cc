use crate::event::Event;
use crate::raw::codes;
use crate::source::EventSource;
use crate::variants::{
    ButtonState, KeyboardEvent, Keycode, MouseButton, MouseButtonEvent, MouseMotionEvent,
    QuitEvent, Scancode,
};

/// A scripted source: events fed into it come out on the next pump.
#[derive(Default)]
pub struct VirtualSource {
    id: String,
    name: String,
    events: Vec<Event>,
}

impl VirtualSource {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            events: Vec::new(),
        }
    }

    /// Queue any event for the next poll.
    pub fn feed(&mut self, event: impl Into<Event>) {
        self.events.push(event.into());
    }

    pub fn press_key(&mut self, scancode: Scancode, keycode: Keycode) {
        self.feed(key(codes::KEYDOWN, ButtonState::Pressed, scancode, keycode));
    }

    pub fn release_key(&mut self, scancode: Scancode, keycode: Keycode) {
        self.feed(key(codes::KEYUP, ButtonState::Released, scancode, keycode));
    }

    pub fn move_mouse(&mut self, window_id: u32, x: i32, y: i32) {
        let mut motion = MouseMotionEvent::new();
        motion.set_window_id(window_id);
        motion.set_x(x);
        motion.set_y(y);
        self.feed(motion);
    }

    pub fn click(&mut self, window_id: u32, button: MouseButton, x: i32, y: i32) {
        for (code, state) in [
            (codes::MOUSEBUTTONDOWN, ButtonState::Pressed),
            (codes::MOUSEBUTTONUP, ButtonState::Released),
        ] {
            let mut event = MouseButtonEvent::tagged(code);
            event.set_window_id(window_id);
            event.set_button(button);
            event.set_state(state);
            event.set_clicks(1);
            event.set_x(x);
            event.set_y(y);
            self.feed(event);
        }
    }

    pub fn quit(&mut self) {
        self.feed(QuitEvent::new());
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

fn key(code: u32, state: ButtonState, scancode: Scancode, keycode: Keycode) -> KeyboardEvent {
    let mut event = KeyboardEvent::tagged(code);
    event.set_state(state);
    event.set_scancode(scancode);
    event.set_keycode(keycode);
    event
}

impl EventSource for VirtualSource {
    fn poll(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}
