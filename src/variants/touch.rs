use crate::raw::{codes, RawTouchFinger};

event_variant! {
    /// Finger touched, moved on, or left a touch device.
    ///
    /// Coordinates are normalized: x/y and pressure in `[0, 1]`, dx/dy in
    /// `[-1, 1]`. Setters clamp to those ranges.
    TouchFingerEvent(RawTouchFinger) => Event::TouchFinger, member = tfinger, default = codes::FINGERDOWN
}

impl TouchFingerEvent {
    pub fn touch_id(&self) -> i64 {
        self.raw.touch_id
    }

    pub fn set_touch_id(&mut self, id: i64) {
        self.raw.touch_id = id;
    }

    pub fn finger_id(&self) -> i64 {
        self.raw.finger_id
    }

    pub fn set_finger_id(&mut self, id: i64) {
        self.raw.finger_id = id;
    }

    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    pub fn set_window_id(&mut self, id: u32) {
        self.raw.window_id = id;
    }

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

    pub fn dx(&self) -> f32 {
        self.raw.dx
    }

    pub fn set_dx(&mut self, dx: f32) {
        self.raw.dx = dx.clamp(-1.0, 1.0);
    }

    pub fn dy(&self) -> f32 {
        self.raw.dy
    }

    pub fn set_dy(&mut self, dy: f32) {
        self.raw.dy = dy.clamp(-1.0, 1.0);
    }

    pub fn pressure(&self) -> f32 {
        self.raw.pressure
    }

    pub fn set_pressure(&mut self, pressure: f32) {
        self.raw.pressure = pressure.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp() {
        let mut event = TouchFingerEvent::new();

        event.set_x(-0.5);
        event.set_y(1.5);
        event.set_dx(-2.0);
        event.set_dy(2.0);
        event.set_pressure(1.1);

        assert_eq!(event.x(), 0.0);
        assert_eq!(event.y(), 1.0);
        assert_eq!(event.dx(), -1.0);
        assert_eq!(event.dy(), 1.0);
        assert_eq!(event.pressure(), 1.0);
    }

    #[test]
    fn in_range_values_are_kept() {
        let mut event = TouchFingerEvent::new();
        event.set_touch_id(8);
        event.set_finger_id(-3);
        event.set_x(0.25);
        event.set_dy(-0.75);

        assert_eq!(event.touch_id(), 8);
        assert_eq!(event.finger_id(), -3);
        assert_eq!(event.x(), 0.25);
        assert_eq!(event.dy(), -0.75);
    }
}
