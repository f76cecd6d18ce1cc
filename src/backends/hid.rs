//! HID hot-plug source.
//!
//! [`HidSource`] re-enumerates HID devices on every poll and reports game
//! controllers that appeared or disappeared as `JoyDeviceAdded` /
//! `JoyDeviceRemoved` events. Instance ids are assigned on arrival and never
//! reused.

use crate::event::Event;
use crate::raw::codes;
use crate::source::EventSource;
use crate::variants::JoyDeviceEvent;
use hidapi::{DeviceInfo, HidApi};
use std::collections::HashMap;

pub struct HidSource {
    api: HidApi,
    known: HashMap<String, i32>,
    next_instance: i32,
}

impl HidSource {
    pub fn new() -> Option<Self> {
        match HidApi::new() {
            Ok(api) => Some(Self {
                api,
                known: HashMap::new(),
                next_instance: 0,
            }),
            Err(e) => {
                log::warn!("failed to initialize HID API: {e}");
                None
            }
        }
    }

    /// Number of controllers currently attached.
    pub fn attached(&self) -> usize {
        self.known.len()
    }
}

/// Generic Desktop joysticks, gamepads and multi-axis controllers.
fn is_game_controller(info: &DeviceInfo) -> bool {
    info.usage_page() == 0x01 && matches!(info.usage(), 0x04 | 0x05 | 0x08)
}

fn device_event(code: u32, instance: i32) -> Event {
    let mut event = JoyDeviceEvent::tagged(code);
    event.set_which(instance);
    event.into()
}

impl EventSource for HidSource {
    fn poll(&mut self) -> Vec<Event> {
        if let Err(e) = self.api.refresh_devices() {
            log::warn!("HID refresh failed: {e}");
            return Vec::new();
        }

        let present: Vec<(String, String)> = self
            .api
            .device_list()
            .filter(|info| is_game_controller(info))
            .map(|info| {
                (
                    info.path().to_string_lossy().into_owned(),
                    info.product_string().unwrap_or("Unknown").to_string(),
                )
            })
            .collect();

        let mut events = Vec::new();

        let gone: Vec<String> = self
            .known
            .keys()
            .filter(|path| !present.iter().any(|(p, _)| p == *path))
            .cloned()
            .collect();
        for path in gone {
            if let Some(instance) = self.known.remove(&path) {
                log::info!("controller {instance} removed");
                events.push(device_event(codes::JOYDEVICEREMOVED, instance));
            }
        }

        for (path, name) in present {
            if self.known.contains_key(&path) {
                continue;
            }
            let instance = self.next_instance;
            self.next_instance += 1;
            log::info!("controller {instance} added: {name}");
            self.known.insert(path, instance);
            events.push(device_event(codes::JOYDEVICEADDED, instance));
        }

        events
    }

    fn name(&self) -> &str {
        "HID controllers"
    }

    fn id(&self) -> &str {
        "hid"
    }
}
