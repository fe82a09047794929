//! Coordinate remapping from display space into browser space

use super::InputEvent;
use crate::geometry::{Point, Size};
use crate::surface::{DisplaySurface, OffscreenBrowserSurface};

/// Scale `point` from a `display`-sized area into a `browser`-sized one.
///
/// Each axis is scaled on its own, so a letterboxed frame maps exactly only
/// when both aspect ratios agree. A degenerate display passes the point
/// through unchanged.
pub fn map_to_browser(point: Point, display: Size, browser: Size) -> Point {
    if display.is_empty() {
        return point;
    }

    Point {
        x: point.x * browser.width / display.width,
        y: point.y * browser.height / display.height,
    }
}

/// Redirects display-surface input into an offscreen browser surface
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRemapper;

impl InputRemapper {
    pub fn new() -> Self {
        Self
    }

    /// Same event with its position moved into browser space
    pub fn remap(&self, event: &InputEvent, display: Size, browser: Size) -> InputEvent {
        match event {
            InputEvent::Pointer(e) => {
                let mut mapped = e.clone();
                mapped.position = map_to_browser(e.position, display, browser);
                InputEvent::Pointer(mapped)
            }
            InputEvent::Wheel(e) => {
                let mut mapped = e.clone();
                mapped.position = map_to_browser(e.position, display, browser);
                InputEvent::Wheel(mapped)
            }
            InputEvent::Key(e) => InputEvent::Key(e.clone()),
        }
    }

    /// Deliver `event` to `surface` and keep key routing on `display`.
    ///
    /// Pointer events give the display focus so later key events keep
    /// arriving here instead of going to whatever the window system thinks
    /// is focused.
    pub fn dispatch(
        &self,
        event: &InputEvent,
        display: &mut DisplaySurface,
        surface: &mut OffscreenBrowserSurface,
    ) {
        let mapped = self.remap(event, display.size(), surface.input_size());
        log::trace!("Forwarding {:?}", mapped);

        match &mapped {
            InputEvent::Pointer(e) => {
                surface.inject_pointer_event(e);
                display.set_focus(true);
            }
            InputEvent::Wheel(e) => surface.inject_wheel_event(e),
            InputEvent::Key(e) => surface.inject_key_event(e),
        }
    }
}
