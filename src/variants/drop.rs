use crate::raw::{codes, read_cstr, write_cstr, RawDrop, DROP_FILE_SIZE};
use std::borrow::Cow;

event_variant! {
    /// Drag-and-drop notification (file, text, begin, complete).
    ///
    /// The dropped path or text is stored inline; values longer than
    /// `DROP_FILE_SIZE - 1` bytes are truncated.
    DropEvent(RawDrop) => Event::Drop, member = drop, default = codes::DROPFILE
}

impl DropEvent {
    /// Dropped file path or text. Empty for begin/complete notifications.
    pub fn file(&self) -> Cow<'_, str> {
        read_cstr(&self.raw.file)
    }

    pub fn set_file(&mut self, file: &str) {
        write_cstr::<DROP_FILE_SIZE>(&mut self.raw.file, file);
    }

    /// Window that received the drop, or 0.
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }
}
