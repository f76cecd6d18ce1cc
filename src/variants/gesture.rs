use crate::raw::{codes, RawDollarGesture, RawMultiGesture};

event_variant! {
    /// Multi-finger pinch/rotate gesture.
    MultiGestureEvent(RawMultiGesture) => Event::MultiGesture, member = mgesture, default = codes::MULTIGESTURE
}

impl MultiGestureEvent {
    pub fn touch_id(&self) -> i64 {
        self.raw.touch_id
    }

    pub fn set_touch_id(&mut self, id: i64) {
        self.raw.touch_id = id;
    }

    /// Rotation of the fingers since the previous event, in radians.
    pub fn delta_theta(&self) -> f32 {
        self.raw.d_theta
    }

    pub fn set_delta_theta(&mut self, theta: f32) {
        self.raw.d_theta = theta;
    }

    /// Pinch amount since the previous event.
    pub fn delta_distance(&self) -> f32 {
        self.raw.d_dist
    }

    pub fn set_delta_distance(&mut self, distance: f32) {
        self.raw.d_dist = distance;
    }

    /// Normalized center x of the gesture.
    pub fn center_x(&self) -> f32 {
        self.raw.x
    }

    pub fn set_center_x(&mut self, x: f32) {
        self.raw.x = x;
    }

    pub fn center_y(&self) -> f32 {
        self.raw.y
    }

    pub fn set_center_y(&mut self, y: f32) {
        self.raw.y = y;
    }

    pub fn fingers(&self) -> u16 {
        self.raw.num_fingers
    }

    pub fn set_fingers(&mut self, fingers: u16) {
        self.raw.num_fingers = fingers;
    }
}

event_variant! {
    /// Dollar gesture recognized (`DollarGesture`) or recorded (`DollarRecord`).
    DollarGestureEvent(RawDollarGesture) => Event::DollarGesture, member = dgesture, default = codes::DOLLARGESTURE
}

impl DollarGestureEvent {
    pub fn touch_id(&self) -> i64 {
        self.raw.touch_id
    }

    pub fn set_touch_id(&mut self, id: i64) {
        self.raw.touch_id = id;
    }

    pub fn gesture_id(&self) -> i64 {
        self.raw.gesture_id
    }

    pub fn set_gesture_id(&mut self, id: i64) {
        self.raw.gesture_id = id;
    }

    pub fn fingers(&self) -> u32 {
        self.raw.num_fingers
    }

    pub fn set_fingers(&mut self, fingers: u32) {
        self.raw.num_fingers = fingers;
    }

    /// Difference between the gesture and the best template match.
    pub fn error(&self) -> f32 {
        self.raw.error
    }

    pub fn set_error(&mut self, error: f32) {
        self.raw.error = error;
    }

    pub fn x(&self) -> f32 {
        self.raw.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.raw.x = x;
    }

    pub fn y(&self) -> f32 {
        self.raw.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.raw.y = y;
    }
}
