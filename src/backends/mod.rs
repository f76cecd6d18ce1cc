//! Event sources.
//!
//! Implementations of [`EventSource`](crate::source::EventSource) that feed
//! the queue when it is pumped.
//!
//! # Feature flags
//! - **`hid`**: enables [`hid::HidSource`], which reports controller hot-plug.
//!
//! [`virtual_input::VirtualSource`] is always available for scripted input.

use crate::source::EventSource;

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;
pub mod virtual_input;

/// Unified discovery across enabled backends.
///
/// Returns the HID hot-plug source when `hid` is enabled and the HID API
/// initializes. Virtual sources are never probed; add them explicitly.
pub fn probe_sources() -> Vec<Box<dyn EventSource>> {
    #[allow(unused_mut)]
    let mut out: Vec<Box<dyn EventSource>> = Vec::new();

    #[cfg(feature = "hid")]
    {
        if let Some(source) = hid::HidSource::new() {
            out.push(Box::new(source));
        }
    }

    out
}
