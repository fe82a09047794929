//! Capability interface for an embeddable browser engine

use super::Snapshot;
use crate::geometry::Size;
use crate::input::{KeyEvent, PointerEvent, WheelEvent};

/// How the engine instance will be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Embedded directly as a visible native surface
    Visible,
    /// Rendered into an offscreen buffer and captured
    Offscreen,
}

/// One browser engine instance.
///
/// Navigation is fire-and-forget: load failures are rendered by the engine
/// as its own error page. Input delivered through `send_*` bypasses window
/// manager routing entirely.
#[cfg_attr(test, mockall::automock)]
pub trait BrowserEngine {
    /// Begin loading `url`, superseding any navigation in flight
    fn load(&mut self, url: &str);

    /// Current logical size
    fn size(&self) -> Size;

    fn resize(&mut self, size: Size);

    /// Keep the engine from painting to any on-screen position
    fn set_offscreen(&mut self, offscreen: bool);

    fn set_visible(&mut self, visible: bool);

    /// Latest rendered frame, `None` if nothing has rendered yet
    fn grab(&mut self) -> Option<Snapshot>;

    fn send_pointer(&mut self, event: &PointerEvent);

    fn send_wheel(&mut self, event: &WheelEvent);

    fn send_key(&mut self, event: &KeyEvent);
}

/// Creates engine instances for new panels
pub trait EngineFactory {
    fn create(&self, target: RenderTarget) -> Box<dyn BrowserEngine>;
}

impl<F> EngineFactory for F
where
    F: Fn(RenderTarget) -> Box<dyn BrowserEngine>,
{
    fn create(&self, target: RenderTarget) -> Box<dyn BrowserEngine> {
        self(target)
    }
}
