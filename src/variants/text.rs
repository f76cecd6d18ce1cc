use crate::raw::{codes, read_cstr, write_cstr, RawTextEditing, RawTextInput, TEXT_SIZE};
use std::borrow::Cow;

event_variant! {
    /// Committed text input.
    TextInputEvent(RawTextInput) => Event::TextInput, member = text, default = codes::TEXTINPUT
}

impl TextInputEvent {
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

    /// UTF-8 text; invalid sequences are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        read_cstr(&self.raw.text)
    }

    /// Stores `text`, truncated at a char boundary to fit the inline buffer.
    pub fn set_text(&mut self, text: &str) {
        write_cstr::<TEXT_SIZE>(&mut self.raw.text, text);
    }
}

event_variant! {
    /// In-progress IME composition.
    TextEditingEvent(RawTextEditing) => Event::TextEditing, member = edit, default = codes::TEXTEDITING
}

impl TextEditingEvent {
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

    pub fn text(&self) -> Cow<'_, str> {
        read_cstr(&self.raw.text)
    }

    pub fn set_text(&mut self, text: &str) {
        write_cstr::<TEXT_SIZE>(&mut self.raw.text, text);
    }

    /// Cursor position within the composition.
    pub fn start(&self) -> i32 {
        self.raw.start
    }

    pub fn set_start(&mut self, start: i32) {
        self.raw.start = start;
    }

    /// Length of the selection, clamped to `[0, TEXT_SIZE]`.
    pub fn length(&self) -> i32 {
        self.raw.length
    }

    pub fn set_length(&mut self, length: i32) {
        self.raw.length = length.clamp(0, TEXT_SIZE as i32);
    }
}
