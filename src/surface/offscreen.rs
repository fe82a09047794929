//! Browser surface rendered offscreen and captured on demand

use super::{BrowserEngine, Snapshot};
use crate::geometry::Size;
use crate::input::{KeyEvent, PointerEvent, WheelEvent};
use crate::navigation::normalize_url;

/// Owns an engine instance that never becomes a visible window.
///
/// The engine is flagged offscreen before it is ever shown, then shown and
/// hidden once so it gets a backing store. Input reaches it only through the
/// `inject_*` calls.
pub struct OffscreenBrowserSurface {
    engine: Box<dyn BrowserEngine>,
    url: String,
    /// Size of the last frame handed out, used for coordinate math
    frame_size: Option<Size>,
}

impl OffscreenBrowserSurface {
    /// Take ownership of `engine` and size it to `size`
    pub fn new(mut engine: Box<dyn BrowserEngine>, size: Size) -> Self {
        engine.set_offscreen(true);
        engine.resize(size);
        engine.set_visible(true);
        engine.set_visible(false);

        Self {
            engine,
            url: String::new(),
            frame_size: None,
        }
    }

    /// Normalize `address` and start loading it
    pub fn navigate(&mut self, address: &str) {
        let url = normalize_url(address);
        log::debug!("Offscreen surface navigating to {}", url);
        self.engine.load(&url);
        self.url = url;
    }

    /// Last navigation target
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Logical size of the underlying engine
    pub fn logical_size(&self) -> Size {
        self.engine.size()
    }

    pub fn resize(&mut self, size: Size) {
        self.engine.resize(size);
    }

    /// Latest frame, or `None` when nothing is ready.
    ///
    /// A returned frame becomes the reference size for input remapping.
    pub fn snapshot(&mut self) -> Option<Snapshot> {
        let snapshot = self.engine.grab().filter(|s| !s.is_empty())?;
        self.frame_size = Some(snapshot.size());
        Some(snapshot)
    }

    /// Size that pointer coordinates are mapped into
    pub fn input_size(&self) -> Size {
        self.frame_size.unwrap_or_else(|| self.engine.size())
    }

    pub fn inject_pointer_event(&mut self, event: &PointerEvent) {
        self.engine.send_pointer(event);
    }

    pub fn inject_wheel_event(&mut self, event: &WheelEvent) {
        self.engine.send_wheel(event);
    }

    pub fn inject_key_event(&mut self, event: &KeyEvent) {
        self.engine.send_key(event);
    }
}
